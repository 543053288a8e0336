//! The `lapbench` binary.

fn main() -> anyhow::Result<()> {
    lapbench_cli::run()
}
