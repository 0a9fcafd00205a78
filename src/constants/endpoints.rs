/// Controller status variables (`/jc`)
pub const STATUS: &str = "jc";
/// Change controller variables (`/cv`)
pub const COMMAND: &str = "cv";

pub const PASSWORD_PARAM: &str = "pw";
