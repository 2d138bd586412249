use std::io;
use std::path::Path;

use align::AlignedRow;
use anyhow::Result;
use anyhow::anyhow;
use csv::Writer;

/// write the aligned table as csv, header included
pub fn write_rows<W: io::Write>(writer: W, rows: &[AlignedRow]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    rows.iter()
        .try_for_each(|r| writer.serialize(r))
        .map_err(|e| anyhow!("writer err: {e:?}"))?;
    writer.flush()?;
    Ok(())
}

pub fn write_csv(path: &Path, rows: &[AlignedRow]) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| anyhow!("failed to create {}: {e}", path.display()))?;
    write_rows(file, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: usize, problem: usize, solved: bool) -> AlignedRow {
        AlignedRow {
            rank,
            problem,
            baseline: 1.5,
            single: 0.25,
            multi: 0.125,
            gpu: 2.0,
            solved,
        }
    }

    #[test]
    fn header_and_rows() {
        let mut out = vec![];
        write_rows(&mut out, &[row(0, 2, true), row(1, 0, false)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "rank,problem,baseline,single,multi,gpu,solved\n\
             0,2,1.5,0.25,0.125,2.0,true\n\
             1,0,1.5,0.25,0.125,2.0,false\n"
        );
    }

    #[test]
    fn no_rows_no_output() {
        let mut out = vec![];
        write_rows(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aligned.csv");
        write_csv(&path, &[row(0, 0, true)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
