const COMMANDS: &[&str] = &["subscribe", "unsubscribe", "handle_intent", "get_status"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
