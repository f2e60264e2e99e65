// Custom log types for different event categories
pub const LOG_TYPE_PARAM: &str = "param";
pub const LOG_TYPE_FINISH: &str = "finish";
pub const LOG_TYPE_POLICY: &str = "policy";
pub const LOG_TYPE_EXPORT: &str = "export";
