use fervor_admin::App;
use leptos::mount_to_body;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("arrancando fervor-admin");
    mount_to_body(App);
}
