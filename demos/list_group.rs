use std::process::ExitCode;

use testgroups::{Selection, filter::TestFilter, group::group_by_base, registry};

fn main() -> ExitCode {
    let selection = match Selection::from_env() {
        Ok(selection) => selection,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let registry = registry();
    let filter = selection.filter(registry);
    let filtered = filter.filter(selection.resolve(registry));

    eprintln!(
        "{}: {} ({} skipped)",
        selection.group,
        selection.group.description(),
        filtered.filtered_out
    );

    let tests: Vec<_> = filtered.tests.collect();
    for (base, members) in group_by_base(registry, tests.iter().copied()) {
        let base = base.map_or("undeclared", |base| base.as_str());
        eprintln!("  {base}: {}", members.len());
    }

    for test in tests {
        println!("{test}");
    }

    ExitCode::SUCCESS
}
