//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use portfolio_particles::{App, init_logging, install_page_behaviors};

fn main() {
	init_logging();
	install_page_behaviors();

	mount_to_body(|| {
		view! { <App /> }
	})
}
