//! Terminal dashboard for the domain/brand scanning service.

mod platform;

fn main() -> anyhow::Result<()> {
    platform::run_app()
}
