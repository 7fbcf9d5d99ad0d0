use std::ffi::OsString;
use std::path::Path;

use anyhow::Result;

use super::{run_inner, Opts, Output, OutputEq, OutputKind};

fn opts(args: &[&str]) -> Result<Opts> {
    Opts::parse_from(args.iter().map(OsString::from))
}

fn output<T>(kind: OutputKind, task: T) -> (bool, String)
where
    T: FnOnce(&mut Output<Vec<u8>>) -> Result<()>,
{
    let mut o = Output::new(Vec::new(), kind);
    let ok = task(&mut o).is_ok();
    let out = String::from_utf8(o.into_inner()).unwrap();
    (ok, out)
}

#[test]
fn test_parse_opts() {
    let o = opts(&["--example", "--verbose", "-D", "small=10", "--", "--bogus"]).unwrap();
    assert!(o.is_example());
    assert!(o.verbose);
    assert!(!o.json);
    assert!(o.has_params());
    assert_eq!(o.param::<u64>("small").unwrap(), Some(10));
    assert_eq!(o.param::<u64>("capacity").unwrap(), None);

    let o = opts(&["-D", "small=10", "-D", "small=20"]).unwrap();
    assert_eq!(o.param::<u64>("small").unwrap(), Some(20));

    let o = opts(&["-D", "small=ten"]).unwrap();
    assert!(o.param::<u64>("small").is_err());

    assert!(opts(&["--bogus"]).is_err());
    assert!(opts(&["--input"]).is_err());
    assert!(opts(&["-D", "small"]).is_err());
}

#[test]
fn test_input_path() {
    let o = opts(&[]).unwrap();
    assert!(!o.is_example());
    assert_eq!(o.input_path("/root", "d07"), Path::new("/root/inputs/d07.txt"));

    let o = opts(&["--example"]).unwrap();
    assert_eq!(
        o.input_path("/root", "d07"),
        Path::new("/root/inputs/d07-example.txt")
    );

    let o = opts(&["--example", "--input", "other.txt"]).unwrap();
    assert!(!o.is_example());
    assert_eq!(o.input_path("/root", "d07"), Path::new("other.txt"));
}

#[test]
fn test_output_eq() {
    assert!((1u64, 2u64).output_eq(&(1, 2)));
    assert!(!(1u64, 2u64).output_eq(&(1, 3)));
    assert!(Some(1usize).output_eq(&Some(1)));
    assert!(!Some(1usize).output_eq(&None));
}

#[test]
fn test_run_normal() {
    let (ok, out) = output(OutputKind::Normal, |o| {
        run_inner(o, Some((95437, 24933642)), || Ok((95437u64, 24933642u64)))
    });

    assert!(ok);
    assert_eq!(
        out,
        "part1: 95437\npart2: 24933642\ninfo: answers match the expected output\n"
    );
}

#[test]
fn test_run_json() {
    let (ok, out) = output(OutputKind::Json, |o| {
        run_inner(o, None::<(u64, u64)>, || Ok((1u64, 2u64)))
    });

    assert!(ok);

    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(
        lines,
        [
            r#"{"type":"answer","data":{"part":1,"value":1}}"#,
            r#"{"type":"answer","data":{"part":2,"value":2}}"#,
        ]
    );
}

#[test]
fn test_run_mismatch() {
    let (ok, out) = output(OutputKind::Normal, |o| {
        let e = run_inner(o, Some((1, 2)), || Ok((1u64, 3u64))).unwrap_err();
        assert_eq!(e.to_string(), "(1, 3) (value) != (1, 2) (expected)");
        o.error(format_args!("{e:#}"))?;
        Ok(())
    });

    assert!(ok);
    assert_eq!(
        out,
        "part1: 1\npart2: 3\nerror: (1, 3) (value) != (1, 2) (expected)\n"
    );
}

#[test]
fn test_json_error() {
    let (_, out) = output(OutputKind::Json, |o| {
        o.error("boom")?;
        Ok(())
    });

    assert_eq!(
        out,
        "{\"type\":\"message\",\"data\":{\"kind\":\"error\",\"output\":\"boom\"}}\n"
    );
}
