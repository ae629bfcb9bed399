use abstract_mindmap::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
