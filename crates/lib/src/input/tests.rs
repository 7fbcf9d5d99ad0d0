use super::{ErrorKind, Input, LineCol};

fn lines(data: &[u8]) -> Vec<String> {
    let input = Input::new("test.txt", data);

    input
        .lines()
        .map(|line| line.map(str::to_owned))
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn test_lines() {
    assert_eq!(lines(b"$ cd /\n$ ls\n"), ["$ cd /", "$ ls"]);
    assert_eq!(lines(b"$ cd /\n$ ls"), ["$ cd /", "$ ls"]);
    assert_eq!(lines(b"$ cd /\r\n$ ls\r\n"), ["$ cd /", "$ ls"]);
    assert_eq!(lines(b"a\n\nb\n"), ["a", "", "b"]);
    assert!(lines(b"").is_empty());
}

#[test]
fn test_not_utf8() {
    let input = Input::new("test.txt", &b"ok\nab\xffc\n"[..]);
    let mut it = input.lines();

    assert_eq!(it.next(), Some(Ok("ok")));

    let error = it.next().unwrap().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotUtf8);
    assert_eq!(error.pos(), LineCol::new(1, 2));
    assert_eq!(error.to_string(), "not utf-8 (at 2:2)");

    assert_eq!(it.line(), 2);
    assert_eq!(it.next(), None);
}

#[test]
fn test_open_missing() {
    let error = Input::open("this/does/not/exist.txt").unwrap_err();
    assert_eq!(error.to_string(), "this/does/not/exist.txt");
}
