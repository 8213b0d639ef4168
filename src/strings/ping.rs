pub const TITLE: &str = "Pong!";
pub const SERVER_FIELD: &str = "Server";

pub fn server_delay(duration: &str) -> String {
    duration.to_string()
}

pub fn server_error(status: &str) -> String {
    format!("Error: {status}")
}
