pub fn restricted(user_id: u64, display_name: &str) -> String {
    format!(":lock: <@{user_id}> ({display_name}) has been restricted.")
}

pub fn unrestricted(user_id: u64, display_name: &str) -> String {
    format!(":unlock: <@{user_id}> ({display_name}) is no longer restricted.")
}

pub fn banned(user_id: u64, username: &str) -> String {
    format!(":hammer: <@{user_id}> ({username}) has been banned.")
}

pub fn unbanned(user_id: u64, username: &str) -> String {
    format!(":dove: <@{user_id}> ({username}) has been unbanned.")
}
