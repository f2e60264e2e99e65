use crate::platform::parameters::gui;

#[derive(Default, Debug)]
pub struct Banner {
    pub message: String,
}

impl Banner {
    pub fn new() -> Banner {
        Banner {
            message: String::new(),
        }
    }

    pub fn format(&mut self) {
        self.message = format!("\n**** Welcome to {}, Version {}", gui::APPLICATION_NAME, gui::VERSION);
        self.message += &format!("\n**** Today is {}", chrono::Utc::now().format("%m-%d-%Y %H:%M:%S"));

        // Add dependencies information
        self.message += "\n\nDEPENDENCIES";
        self.message += &format!("\nPanelForge       : {}", gui::VERSION);
        self.message += &format!("\negui             : {}", env!("EGUI_VERSION"));
        self.message += &format!("\neframe           : {}", env!("EFRAME_VERSION"));
        self.message += &format!("\nnalgebra         : {}\n", env!("NALGEBRA_VERSION"));
    }

    #[allow(dead_code)]
    pub fn print(&mut self) {
        println!("{}", self.message);
    }
}
