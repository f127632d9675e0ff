use super::*;
use std::io::Read;
use tempfile::TempDir;

#[test]
fn test_compress_produces_single_entry_zip() {
    let dir = TempDir::new().unwrap();
    let demo = dir.path().join("match1.dem");
    let payload = vec![0x42u8; 64 * 1024];
    fs::write(&demo, &payload).unwrap();

    let result = compress_demo(&demo).unwrap();

    let zip_path = dir.path().join("match1.zip");
    assert!(zip_path.exists());
    assert_eq!(result.original_size, payload.len() as u64);
    assert_eq!(
        result.compressed_size,
        fs::metadata(&zip_path).unwrap().len()
    );
    // Highly repetitive input must deflate well.
    assert!(result.compressed_size < result.original_size);
    assert!(result.ratio().unwrap() > 0.0);

    let mut archive = zip::ZipArchive::new(fs::File::open(&zip_path).unwrap()).unwrap();
    assert_eq!(archive.len(), 1);
    let mut entry = archive.by_index(0).unwrap();
    assert_eq!(entry.name(), "match1.dem");
    let mut contents = Vec::new();
    entry.read_to_end(&mut contents).unwrap();
    assert_eq!(contents, payload);
}

#[test]
fn test_compress_leaves_source_in_place() {
    let dir = TempDir::new().unwrap();
    let demo = dir.path().join("match1.dem");
    fs::write(&demo, b"demo bytes").unwrap();

    compress_demo(&demo).unwrap();

    assert_eq!(fs::read(&demo).unwrap(), b"demo bytes");
}

#[test]
fn test_compress_overwrites_existing_archive() {
    let dir = TempDir::new().unwrap();
    let demo = dir.path().join("match1.dem");
    fs::write(&demo, b"demo bytes").unwrap();
    fs::write(dir.path().join("match1.zip"), b"stale not-a-zip").unwrap();

    compress_demo(&demo).unwrap();

    let zip_path = dir.path().join("match1.zip");
    let archive = zip::ZipArchive::new(fs::File::open(&zip_path).unwrap()).unwrap();
    assert_eq!(archive.len(), 1);
}

#[test]
fn test_compress_empty_demo_skips_ratio() {
    let dir = TempDir::new().unwrap();
    let demo = dir.path().join("empty.dem");
    fs::write(&demo, b"").unwrap();

    let result = compress_demo(&demo).unwrap();

    assert_eq!(result.original_size, 0);
    // Archive headers make the output non-empty; ratio stays undefined.
    assert!(result.compressed_size > 0);
    assert_eq!(result.ratio(), None);
}

#[test]
fn test_compress_rejects_non_demo() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("match1.zip");
    fs::write(&file, b"zip").unwrap();

    let err = compress_demo(&file).unwrap_err();
    assert!(matches!(err, OpError::InvalidInput(_)));
}

#[test]
fn test_compress_missing_demo() {
    let dir = TempDir::new().unwrap();

    let err = compress_demo(&dir.path().join("absent.dem")).unwrap_err();
    assert!(matches!(err, OpError::NotFound(_)));
}

#[test]
fn test_compress_failure_leaves_no_partial_destination() {
    let dir = TempDir::new().unwrap();

    let _ = compress_demo(&dir.path().join("absent.dem"));

    assert!(!dir.path().join("absent.zip").exists());
}

#[tokio::test]
async fn test_compress_task_offloads_and_returns() {
    let dir = TempDir::new().unwrap();
    let demo = dir.path().join("match1.dem");
    fs::write(&demo, vec![7u8; 4096]).unwrap();

    let result = compress_demo_task(demo).await.unwrap();

    assert_eq!(result.original_size, 4096);
    assert!(dir.path().join("match1.zip").exists());
}
