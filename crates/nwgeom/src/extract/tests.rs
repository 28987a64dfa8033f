use std::io::Cursor;

use approx::assert_abs_diff_eq;
use test_case::test_case;

use super::*;

fn extract_str(source: &str, s: &str) -> Result<Vec<Geometry>, Error> {
    let mut geoms = Vec::new();
    extract_from(source, Cursor::new(s), &mut geoms)?;
    Ok(geoms)
}

#[test_case(
    " Output coordinates in angstroms (scale by  1.000000000E+00 to convert to angstroms)",
    Some(Units::Angstrom);
    "angstrom"
)]
#[test_case(
    " Output coordinates in a.u. (scale by  1.889725989E+00 to convert to a.u.)",
    Some(Units::AtomicUnits);
    "au"
)]
#[test_case("Output coordinates in angstroms", Some(Units::Angstrom); "bare")]
#[test_case("\tOutput coordinates in a.u.", Some(Units::AtomicUnits); "tab")]
#[test_case("Output coordinates in nm", None; "nm")]
#[test_case("Output coordinates in aXuX", None; "literal dots")]
#[test_case(" Effective nuclear repulsion energy (a.u.)  9.168", None; "other")]
#[test_case("x Output coordinates in angstroms", None; "not a prefix")]
fn markers(line: &str, want: Option<Units>) {
    assert_eq!(marker(line), want);
}

#[test]
fn lithium() {
    let got = extract_str(
        "li.nwo",
        "Output coordinates in angstroms
 header 1
 header 2
 header 3
1  Li  0  1.0 2.0 3.0

",
    )
    .unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].source(), "li.nwo");
    assert_eq!(got[0].count(), 1);
    assert_eq!(got[0].atom_lines(), vec!["Li 1.0 2.0 3.0"]);
}

#[test]
fn atomic_units() {
    let got = extract_str(
        "h.nwo",
        " Output coordinates in a.u.
header
header
header
    1 H                    1.0000     1.889725989     0.00000000    -3.779451978
",
    )
    .unwrap();
    let atom = &got[0].atoms()[0];
    assert_eq!(atom.symbol, "H");
    assert_abs_diff_eq!(atom.x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(atom.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(atom.z, -2.0, epsilon = 1e-12);
}

#[test]
fn block_ends_at_eof() {
    let got = extract_str(
        "eof.nwo",
        "Output coordinates in angstroms
a
b
c
    1 O                    8.0000     0.00000000     0.00000000     0.11726921",
    )
    .unwrap();
    assert_eq!(got[0].len(), 1);
}

#[test]
fn eof_in_header() {
    let got = extract_str("short.nwo", "Output coordinates in angstroms\na\n")
        .unwrap();
    assert_eq!(got.len(), 1);
    assert!(got[0].is_empty());
}

#[test]
fn header_lines_are_skipped_blindly() {
    // the header rows are not inspected, so a marker among them is ignored
    let got = extract_str(
        "skip.nwo",
        "Output coordinates in angstroms
Output coordinates in a.u.

header
    1 He                    2.0000     1.0     2.0     3.0
",
    )
    .unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].atom_lines(), vec!["He 1.0 2.0 3.0"]);
}

#[test]
fn only_first_blank_line_ends_block() {
    let got = extract_str(
        "two.nwo",
        "Output coordinates in angstroms
a
b
c
    1 He                    2.0000     1.0     2.0     3.0

    2 He                    2.0000     1.0     2.0     3.0
",
    )
    .unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].len(), 1);
}

#[test]
fn token_count() {
    let got = extract_str(
        "bad.nwo",
        "Output coordinates in angstroms
a
b
c
    1 He                    2.0000     1.0     2.0
",
    );
    assert_eq!(
        got,
        Err(Error::TokenCount {
            source: "bad.nwo".to_owned(),
            line: 5,
            text: "    1 He                    2.0000     1.0     2.0"
                .to_owned(),
        })
    );
}

#[test]
fn bad_coordinate() {
    let got = extract_str(
        "bad.nwo",
        "Output coordinates in angstroms
a
b
c
    1 He                    2.0000     1.0     2.0    three
",
    );
    assert_eq!(
        got,
        Err(Error::BadCoordinate {
            source: "bad.nwo".to_owned(),
            line: 5,
            token: "three".to_owned(),
        })
    );
}

#[test]
fn files() {
    let got =
        extract_files(&["testfiles/h2o.nwo", "testfiles/h2o_opt.nwo"]).unwrap();
    let counts: Vec<_> = got.iter().map(|g| (g.source(), g.count())).collect();
    assert_eq!(
        counts,
        vec![
            ("testfiles/h2o.nwo", 1),
            ("testfiles/h2o_opt.nwo", 1),
            ("testfiles/h2o_opt.nwo", 2),
            ("testfiles/h2o_opt.nwo", 3),
        ]
    );
    assert!(got.iter().all(|g| g.len() == 3));
    assert_eq!(
        got[2].atom_lines(),
        vec![
            "O 0.0 0.0 0.11726989060317147",
            "H 0.7588634004863656 0.0 -0.46907960474686583",
            "H -0.7588634004863656 0.0 -0.46907960474686583",
        ]
    );
}

#[test]
fn counts_restart_per_file() {
    let got = extract_files(&[
        "testfiles/h2o_opt.nwo",
        "testfiles/empty.nwo",
        "testfiles/h2o_opt.nwo",
    ])
    .unwrap();
    let counts: Vec<_> = got.iter().map(Geometry::count).collect();
    assert_eq!(counts, vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn first_error_aborts() {
    let got = extract_files(&[
        "testfiles/h2o.nwo",
        "testfiles/bad_tokens.nwo",
        "testfiles/h2o_opt.nwo",
    ]);
    assert!(matches!(
        got,
        Err(Error::TokenCount { source, line: 6, .. })
            if source == "testfiles/bad_tokens.nwo"
    ));
}

#[test]
fn missing_file() {
    let got = extract_files(&["testfiles/nonexistent.nwo"]);
    assert_eq!(
        got,
        Err(Error::Io(
            "testfiles/nonexistent.nwo".to_owned(),
            std::io::ErrorKind::NotFound
        ))
    );
}
