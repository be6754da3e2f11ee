//! Demo binary: render both charts into the current directory and print the
//! summary tables. Any fault exits non-zero with the error's diagnostic.

fn main() -> Result<(), chartlab::DemoError> {
    chartlab::run()
}
