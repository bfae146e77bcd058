use std::fs;
use std::io::Cursor;
use std::path::Path;
use unsit::{SitArchive, SitError};

const FIXTURES_DIR: &str = "tests/fixtures";

// Copy of the CRC16 implementation for test fixture construction.
fn crc16(data: &[u8]) -> u16 {
    let mut crc = 0u16;
    for &b in data {
        crc ^= b as u16;
        for _ in 0..8 {
            if (crc & 0x0001) != 0 {
                crc = (crc >> 1) ^ 0xA001;
            } else {
                crc >>= 1;
            }
        }
    }
    crc
}

// Build one 112-byte SIT! classic entry header plus its payloads. Field
// offsets follow the on-disk layout: methods at 0/1, name at 2, Finder
// info at 66, fork sizes at 84, fork CRCs at 100, header CRC at 110.
#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    res_method: u8,
    data_method: u8,
    res: (&[u8], u32, u16),
    data: (&[u8], u32, u16),
    file_type: &[u8; 4],
    creator: &[u8; 4],
    finder_flags: u16,
) -> Vec<u8> {
    let mut header = vec![0u8; 112];
    header[0] = res_method;
    header[1] = data_method;
    header[2] = name.len() as u8;
    header[3..3 + name.len()].copy_from_slice(name.as_bytes());
    header[66..70].copy_from_slice(file_type);
    header[70..74].copy_from_slice(creator);
    header[74..76].copy_from_slice(&finder_flags.to_be_bytes());
    header[84..88].copy_from_slice(&res.1.to_be_bytes());
    header[88..92].copy_from_slice(&data.1.to_be_bytes());
    header[92..96].copy_from_slice(&(res.0.len() as u32).to_be_bytes());
    header[96..100].copy_from_slice(&(data.0.len() as u32).to_be_bytes());
    header[100..102].copy_from_slice(&res.2.to_be_bytes());
    header[102..104].copy_from_slice(&data.2.to_be_bytes());
    let crc = crc16(&header[..110]);
    header[110..112].copy_from_slice(&crc.to_be_bytes());

    header.extend_from_slice(res.0);
    header.extend_from_slice(data.0);
    header
}

fn store_file(name: &str, data: &[u8], res: &[u8]) -> Vec<u8> {
    entry(
        name,
        0,
        0,
        (res, res.len() as u32, crc16(res)),
        (data, data.len() as u32, crc16(data)),
        b"TEXT",
        b"ttxt",
        0,
    )
}

fn folder_start(name: &str) -> Vec<u8> {
    entry(
        name,
        0,
        32,
        (&[], 0, 0),
        (&[], 0, 0),
        &[0; 4],
        &[0; 4],
        0,
    )
}

fn folder_end() -> Vec<u8> {
    entry("", 0, 33, (&[], 0, 0), (&[], 0, 0), &[0; 4], &[0; 4], 0)
}

fn archive(chunks: &[Vec<u8>]) -> Vec<u8> {
    archive_with_magic(b"SIT!", chunks)
}

fn archive_with_magic(magic: &[u8; 4], chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut body = Vec::new();
    for c in chunks {
        body.extend_from_slice(c);
    }
    let mut out = Vec::new();
    out.extend_from_slice(magic);
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&((22 + body.len()) as u32).to_be_bytes());
    out.extend_from_slice(b"rLau");
    out.extend_from_slice(&[0u8; 8]);
    out.extend_from_slice(&body);
    out
}

fn open(data: Vec<u8>, flatten: bool) -> SitArchive<Cursor<Vec<u8>>> {
    SitArchive::open(Cursor::new(data), flatten).expect("archive should open")
}

#[test]
fn test_minimal_archive() {
    let data = archive(&[store_file("README", b"hello\n", &[])]);
    let sit = open(data, false);

    assert_eq!(sit.list(), vec!["README".to_string()]);
    assert!(sit.has("README"));
    assert_eq!(sit.read("README").expect("read"), b"hello\n");
}

#[test]
fn test_every_listed_path_exists() {
    let data = archive(&[
        store_file("one", b"1", &[]),
        store_file("two", b"22", &[]),
        store_file("three", b"333", &[]),
    ]);
    let sit = open(data, false);

    let paths = sit.list();
    assert_eq!(paths.len(), 3);
    for path in paths {
        assert!(sit.has(&path));
        assert!(!sit.read(&path).expect("read").is_empty());
    }
}

#[test]
fn test_alternate_magics() {
    for magic in [b"ST46", b"ST65", b"STin"] {
        let data = archive_with_magic(magic, &[store_file("f", b"x", &[])]);
        let sit = open(data, false);
        assert_eq!(sit.read("f").expect("read"), b"x");
    }
}

#[test]
fn test_folder_tree() {
    let data = archive(&[
        folder_start("A"),
        folder_start("B"),
        store_file("f.txt", b"x", &[]),
        folder_end(),
        folder_end(),
    ]);

    let sit = open(data.clone(), false);
    assert_eq!(sit.list(), vec!["A:B:f.txt".to_string()]);
    assert_eq!(sit.read("A:B:f.txt").expect("read"), b"x");

    let flat = open(data, true);
    assert_eq!(flat.list(), vec!["f.txt".to_string()]);
    assert_eq!(flat.read("f.txt").expect("read"), b"x");
    // Flattened lookups also accept a full path and use its last component.
    assert_eq!(flat.read("A:B:f.txt").expect("read"), b"x");
}

#[test]
fn test_flattened_paths_have_no_separator() {
    let data = archive(&[
        folder_start("outer"),
        store_file("a.txt", b"a", &[]),
        folder_start("inner"),
        store_file("b.txt", b"b", &[]),
        folder_end(),
        folder_end(),
    ]);
    let sit = open(data, true);
    for path in sit.list() {
        assert!(!path.contains(':'), "flattened path {} has separator", path);
    }
}

#[test]
fn test_deep_nesting() {
    let mut chunks = Vec::new();
    for level in 0..8 {
        chunks.push(folder_start(&format!("d{}", level)));
    }
    chunks.push(store_file("leaf", b"deep", &[]));
    for _ in 0..8 {
        chunks.push(folder_end());
    }
    chunks.push(store_file("top", b"up", &[]));

    let sit = open(archive(&chunks), false);
    assert_eq!(
        sit.read("d0:d1:d2:d3:d4:d5:d6:d7:leaf").expect("read"),
        b"deep"
    );
    // The prefix stack must be fully unwound afterwards.
    assert_eq!(sit.read("top").expect("read"), b"up");
}

#[test]
fn test_both_forks_and_finder_info() {
    let data = archive(&[entry(
        "dual",
        0,
        0,
        (b"RSRC", 4, crc16(b"RSRC")),
        (b"DATA", 4, crc16(b"DATA")),
        b"APPL",
        b"CARO",
        0x0100,
    )]);
    let sit = open(data, false);

    assert_eq!(sit.read("dual").expect("read"), b"DATA");
    assert_eq!(
        sit.read_resource_fork("dual").expect("read rsrc"),
        Some(b"RSRC".to_vec())
    );

    let finder = sit.read_finder_info("dual").expect("finder info");
    assert_eq!(&finder[0..4], b"APPL");
    assert_eq!(&finder[4..8], b"CARO");
    assert_eq!(u16::from_be_bytes([finder[8], finder[9]]), 0x0100);
    assert_eq!(&finder[10..16], &[0u8; 6]);
}

#[test]
fn test_empty_data_fork_with_resource_fork() {
    let data = archive(&[entry(
        "rsrc-only",
        0,
        0,
        (b"RSRC", 4, crc16(b"RSRC")),
        (&[], 0, 0),
        b"TEXT",
        b"ttxt",
        0,
    )]);
    let sit = open(data, false);

    assert!(sit.has("rsrc-only"));
    assert_eq!(sit.read("rsrc-only").expect("read"), b"");
    assert_eq!(
        sit.read_resource_fork("rsrc-only").expect("read rsrc"),
        Some(b"RSRC".to_vec())
    );
}

#[test]
fn test_missing_resource_fork_is_absent() {
    let data = archive(&[store_file("plain", b"data", &[])]);
    let sit = open(data, false);
    assert_eq!(sit.read_resource_fork("plain").expect("read rsrc"), None);
}

#[test]
fn test_case_insensitive_lookup() {
    let data = archive(&[
        folder_start("Folder"),
        store_file("ReadMe.TXT", b"hi", &[]),
        folder_end(),
    ]);
    let sit = open(data, false);

    assert!(sit.has("folder:readme.txt"));
    assert!(sit.has("FOLDER:README.TXT"));
    assert_eq!(sit.read("Folder:readme.Txt").expect("read"), b"hi");
    assert!(sit.read_finder_info("FOLDER:readme.txt").is_some());
}

#[test]
fn test_not_found() {
    let data = archive(&[store_file("present", b"x", &[])]);
    let sit = open(data, false);
    assert!(!sit.has("absent"));
    assert!(matches!(
        sit.read("absent").unwrap_err(),
        SitError::NotFound(_)
    ));
}

#[test]
fn test_encrypted_entry_refused() {
    // 0x8D: method 13 with the entry-encrypted bit set.
    let data = archive(&[entry(
        "secret",
        0,
        0x8D,
        (&[], 0, 0),
        (b"garbage", 7, 0),
        b"TEXT",
        b"ttxt",
        0,
    )]);
    let sit = open(data, false);

    assert!(sit.has("secret"));
    assert!(matches!(
        sit.read("secret").unwrap_err(),
        SitError::Encrypted
    ));
}

#[test]
fn test_unsupported_method() {
    let data = archive(&[entry(
        "rle",
        0,
        5,
        (&[], 0, 0),
        (b"xxxx", 4, 0),
        b"TEXT",
        b"ttxt",
        0,
    )]);
    let sit = open(data, false);
    assert!(matches!(
        sit.read("rle").unwrap_err(),
        SitError::UnsupportedMethod(5)
    ));
}

#[test]
fn test_distinct_error_kinds() {
    // Unknown magic.
    let mut bogus = archive(&[]);
    bogus[0..4].copy_from_slice(b"ZIP!");
    assert!(matches!(
        SitArchive::open(Cursor::new(bogus), false).unwrap_err(),
        SitError::BadMagic
    ));

    // Bad secondary magic.
    let mut bogus = archive(&[]);
    bogus[10..14].copy_from_slice(b"uaLr");
    assert!(matches!(
        SitArchive::open(Cursor::new(bogus), false).unwrap_err(),
        SitError::BadMagic
    ));

    // Stream cut off mid-header.
    let mut short = archive(&[store_file("f", b"x", &[])]);
    short.truncate(22 + 40);
    assert!(matches!(
        SitArchive::open(Cursor::new(short), false).unwrap_err(),
        SitError::Truncated
    ));

    // Corrupted header byte.
    let mut damaged = archive(&[store_file("f", b"x", &[])]);
    damaged[22 + 70] ^= 0xFF;
    assert!(matches!(
        SitArchive::open(Cursor::new(damaged), false).unwrap_err(),
        SitError::HeaderCrcMismatch { .. }
    ));
}

#[test]
fn test_name_too_long() {
    // A header that passes its CRC but declares a 40-byte name.
    let mut header = vec![0u8; 112];
    header[2] = 40;
    let crc = crc16(&header[..110]);
    header[110..112].copy_from_slice(&crc.to_be_bytes());

    let data = archive(&[header]);
    assert!(matches!(
        SitArchive::open(Cursor::new(data), false).unwrap_err(),
        SitError::NameTooLong(40)
    ));
}

#[test]
fn test_payload_out_of_bounds() {
    // Compressed size pointing past the end of the stream.
    let mut header = vec![0u8; 112];
    header[2] = 1;
    header[3] = b'f';
    header[88..92].copy_from_slice(&100u32.to_be_bytes()); // data ulen
    header[96..100].copy_from_slice(&1000u32.to_be_bytes()); // data clen
    let crc = crc16(&header[..110]);
    header[110..112].copy_from_slice(&crc.to_be_bytes());

    let data = archive(&[header]);
    assert!(matches!(
        SitArchive::open(Cursor::new(data), false).unwrap_err(),
        SitError::Truncated
    ));
}

#[test]
fn test_archive_size_bounds_parsing() {
    // Entries past the declared archive size are not indexed; a shorter
    // declared size yields the same prefix of the entry table.
    let chunk1 = store_file("first", b"1", &[]);
    let chunk2 = store_file("second", b"2", &[]);

    let mut full = archive(&[chunk1.clone(), chunk2.clone()]);
    let prefix_size = (22 + chunk1.len()) as u32;
    full[6..10].copy_from_slice(&prefix_size.to_be_bytes());

    let sit = open(full, false);
    assert_eq!(sit.list(), vec!["first".to_string()]);
    assert!(!sit.has("second"));
    assert_eq!(sit.read("first").expect("read"), b"1");
}

#[test]
fn test_macroman_name_decoding() {
    // 0x8E is 'é' in MacRoman.
    let mut header = vec![0u8; 112];
    header[2] = 1;
    header[3] = 0x8E;
    header[88..92].copy_from_slice(&1u32.to_be_bytes());
    header[96..100].copy_from_slice(&1u32.to_be_bytes());
    header[102..104].copy_from_slice(&crc16(b"x").to_be_bytes());
    let crc = crc16(&header[..110]);
    header[110..112].copy_from_slice(&crc.to_be_bytes());
    header.push(b'x');

    let sit = open(archive(&[header]), false);
    assert_eq!(sit.list(), vec!["\u{00e9}".to_string()]);
    assert_eq!(sit.read("\u{00e9}").expect("read"), b"x");
}

#[test]
fn test_read_external_fixtures() {
    // Decodes any real archives dropped into tests/fixtures as
    // "manual_*.sit" (e.g. produced by StuffIt itself or unar).
    let fixture_dir = Path::new(FIXTURES_DIR);
    if !fixture_dir.exists() {
        return;
    }

    for dir_entry in fs::read_dir(fixture_dir).unwrap() {
        let path = dir_entry.unwrap().path();
        let is_sit = path.extension().map_or(false, |e| e == "sit");
        let is_manual = path
            .file_name()
            .map_or(false, |n| n.to_string_lossy().starts_with("manual_"));
        if !is_sit || !is_manual {
            continue;
        }

        println!("Testing manual fixture: {:?}", path);
        let archive = SitArchive::open_file(&path, false)
            .unwrap_or_else(|e| panic!("Failed to open {:?}: {}", path, e));
        for entry_path in archive.list() {
            let data = archive
                .read(&entry_path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", entry_path, e));
            println!("  {}: {} bytes", entry_path, data.len());
        }
    }
}
