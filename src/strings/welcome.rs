pub fn welcome(display_name: &str) -> String {
    format!("Welcome {display_name}!")
}
