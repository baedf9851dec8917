//! Demo client for the widget factories.
//!
//! Resolves which families to render (positional arguments, else the host's
//! native family), then touches only the abstract factory and widget
//! contracts. Swapping the family swaps every widget the run produces with
//! no change to the rendering code below.

use std::env;
use std::io;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use boceto::model::{Family, FamilyError};
use boceto::platform::{factory_for, WidgetFactory};

fn main() -> ExitCode {
    init_tracing();

    match run(env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Resolve the requested families and paint one widget of each kind per
/// family, in request order. Fails before painting anything if any name is
/// unknown.
fn run(args: impl Iterator<Item = String>) -> Result<(), FamilyError> {
    let mut families = args
        .map(|arg| arg.parse())
        .collect::<Result<Vec<Family>, _>>()?;

    if families.is_empty() {
        let native = Family::native();
        debug!("no family requested, using native {}", native);
        families.push(native);
    }

    for family in families {
        paint_family(factory_for(family).as_ref());
    }

    Ok(())
}

/// Render one widget of each kind through the abstract contracts only.
fn paint_family(factory: &dyn WidgetFactory) {
    debug!("painting {} family", factory.family());
    factory.create_button().paint();
    factory.create_check_box().paint();
}

/// Install the global tracing subscriber.
///
/// Diagnostics go to stderr so the rendered widget lines on stdout stay
/// clean; `RUST_LOG` adjusts the filter (default `info`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}
