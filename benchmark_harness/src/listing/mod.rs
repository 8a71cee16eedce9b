//!
//! The benchmark and group listings.
//!

use std::io::Write;

use benchmark_selection::Catalog;
use benchmark_selection::Manifest;

///
/// Writes the selected benchmarks followed by their total number.
///
pub fn write_benchmarks<W>(writer: &mut W, benchmarks: &[String]) -> std::io::Result<()>
where
    W: Write,
{
    for benchmark in benchmarks.iter() {
        writeln!(writer, "- {benchmark}")?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total: {} benchmarks", benchmarks.len())
}

///
/// Writes every non-empty group with its members.
///
/// The `all` and `default` groups go first, the rest are sorted by name.
///
pub fn write_groups<W, C>(writer: &mut W, catalog: &C) -> std::io::Result<()>
where
    W: Write,
    C: Catalog + ?Sized,
{
    let mut names = vec![Manifest::GROUP_ALL, Manifest::GROUP_DEFAULT];
    names.extend(
        catalog
            .group_names()
            .into_iter()
            .filter(|name| *name != Manifest::GROUP_ALL && *name != Manifest::GROUP_DEFAULT),
    );

    for name in names.into_iter() {
        let members = match catalog.group(name) {
            Some(members) if !members.is_empty() => members,
            _ => continue,
        };
        writeln!(writer, "{name} ({}):", members.len())?;
        for member in members.iter() {
            writeln!(writer, "- {member}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use benchmark_selection::Benchmark;
    use benchmark_selection::Manifest;

    #[test]
    fn benchmarks() {
        let mut buffer = Vec::new();
        super::write_benchmarks(&mut buffer, &["chaos".to_owned(), "2to3".to_owned()])
            .expect("Writing failed");
        assert_eq!(
            String::from_utf8(buffer).expect("Always valid"),
            "- chaos\n- 2to3\n\nTotal: 2 benchmarks\n"
        );
    }

    #[test]
    fn groups() {
        let manifest = Manifest::new(
            vec![
                Benchmark::new("b", &["zeta"]),
                Benchmark::new("a", &["alpha"]),
            ],
            BTreeMap::from([
                ("default".to_owned(), vec!["b".to_owned()]),
                ("empty".to_owned(), vec![]),
            ]),
        )
        .expect("Always valid");

        let mut buffer = Vec::new();
        super::write_groups(&mut buffer, &manifest).expect("Writing failed");
        assert_eq!(
            String::from_utf8(buffer).expect("Always valid"),
            "all (2):\n- a\n- b\n\n\
             default (1):\n- b\n\n\
             alpha (1):\n- a\n\n\
             zeta (1):\n- b\n\n"
        );
    }
}
