use std::path::Path;

use boardgen::report::Report;

fn main() -> anyhow::Result<()> {
    boardgen::gen_sequence(Path::new("."), Report::Count(10))
}
