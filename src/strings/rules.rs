pub fn getting_rules(sub_name: &str) -> String {
    format!("Getting the rules of r/{sub_name}...")
}

pub fn embed_title(sub_name: &str) -> String {
    format!("Rules of r/{sub_name}")
}

pub fn embed_message(duration: &str) -> String {
    format!("Here are the rules! ({duration})")
}

pub fn sub_not_found(sub_name: &str) -> String {
    format!("I couldn't find the sub r/{sub_name}. Please check that it's spelled correctly.")
}

pub fn no_rules(sub_name: &str) -> String {
    format!("r/{sub_name} doesn't have any rules.")
}
