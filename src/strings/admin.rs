pub fn loaded(module: &str) -> String {
    format!("Module \"{module}\" has been successfully loaded :+1:")
}

pub fn unloaded(module: &str) -> String {
    format!("Module \"{module}\" has been successfully unloaded :+1:")
}

pub fn reloaded(module: &str) -> String {
    format!("Module \"{module}\" has been successfully reloaded :+1:")
}

pub fn unknown_module(module: &str, available: &str) -> String {
    format!("There is no module \"{module}\". Available modules: {available}")
}

pub fn cannot_unload(module: &str) -> String {
    format!("Module \"{module}\" can't be unloaded.")
}
