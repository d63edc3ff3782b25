use std::fs;
use std::path::Path;

use docqa::{Document, DocumentSource, Error};
use tokio_test::{assert_err, assert_ok};

fn write(dir: &Path, name: &str, contents: &str)
{   fs::write(dir.join(name), contents).unwrap();
}

/// Expected text computed from the same listing order the loader sees
fn expected_concatenation(dir: &Path) -> String
{   let mut text = String::new();
    for entry in fs::read_dir(dir).unwrap()
    {   let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        if path.is_file()
          && (name.ends_with(".txt") || name.ends_with(".md"))
        {   text.push_str(&fs::read_to_string(&path).unwrap());
            text.push_str("\n\n");
        }
    }
    text.trim_end().to_string()
}

#[test]
fn test_directory_concatenates_in_listing_order()
{   let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "interview_a.txt", "Respondent A said hello.");
    write(dir.path(), "interview_b.md", "Respondent B said goodbye.\n");
    write(dir.path(), "notes.txt", "  indented first line\ntrailing  ");

    let document = assert_ok!(Document::from_directory(dir.path()));
    assert_eq!(document.as_str(), expected_concatenation(dir.path()));
    assert_eq!(document.source(), &DocumentSource::Directory { files: 3 });
    assert!(document.as_str().contains("Respondent A said hello.\n\n"));
}

#[test]
fn test_directory_excludes_other_extensions()
{   let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "keep.txt", "kept");
    write(dir.path(), "script.py", "print('skipped')");
    write(dir.path(), "data.csv", "a,b,c");
    write(dir.path(), "README.TXT", "upper-case extension");
    fs::create_dir(dir.path().join("folder.md")).unwrap();

    let document = assert_ok!(Document::from_directory(dir.path()));
    assert_eq!(document.as_str(), "kept");
    assert_eq!(document.source(), &DocumentSource::Directory { files: 1 });
}

#[test]
fn test_directory_strips_trailing_whitespace()
{   let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "only.md", "# Title\n\nBody text.   \n\n\n");

    let document = assert_ok!(Document::from_directory(dir.path()));
    assert_eq!(document.as_str(), "# Title\n\nBody text.");
}

#[test]
fn test_empty_directory_gives_empty_document()
{   let dir = tempfile::tempdir().unwrap();

    let document = assert_ok!(Document::from_directory(dir.path()));
    assert!(document.is_empty());
    assert_eq!(document.as_str(), "");

    write(dir.path(), "image.png", "not text");
    let document = assert_ok!(Document::from_directory(dir.path()));
    assert!(document.is_empty());
}

#[test]
fn test_missing_directory_is_an_error()
{   let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = assert_err!(Document::from_directory(&missing));
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_unreadable_file_aborts_load()
{   let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "good.txt", "fine");
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();

    let err = assert_err!(Document::from_directory(dir.path()));
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_upload_is_decoded_verbatim()
{   let bytes = b"Line one.\n\nLine two.\n\n";
    let document = assert_ok!(Document::from_upload(bytes));
    assert_eq!(document.as_str(), "Line one.\n\nLine two.\n\n");
    assert_eq!(document.source(), &DocumentSource::Upload);
}

#[test]
fn test_upload_rejects_invalid_utf8()
{   let err = assert_err!(Document::from_upload(&[0xc3, 0x28]));
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_upload_path_accepts_txt_and_md_only()
{   let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "article.md", "An article.");
    write(dir.path(), "article.pdf", "%PDF");

    let document = assert_ok!(
      Document::from_upload_path(&dir.path().join("article.md"))
    );
    assert_eq!(document.as_str(), "An article.");

    let err = assert_err!(
      Document::from_upload_path(&dir.path().join("article.pdf"))
    );
    assert!(matches!(err, Error::UnsupportedFileType(_)));

    let err = assert_err!(
      Document::from_upload_path(&dir.path().join("missing.txt"))
    );
    assert!(matches!(err, Error::Io(_)));
}
