mod common;

use std::fs;
use tempfile::TempDir;

use demodeck::services::archive::compress::{compress_demo, compress_demo_task};
use demodeck::services::explorer::listing::scan_folder;
use demodeck::services::explorer::types::FileKind;
use demodeck::services::ingest::ingest_paths;
use demodeck::types::results::IngestStatus;

// Compress a demo, feed the resulting archive back through ingest on an
// empty folder, and get the original bytes back.
#[test]
fn compress_then_ingest_round_trips_demo_bytes() {
    common::init_logging();
    let dir = TempDir::new().unwrap();
    let source_folder = dir.path().join("source");
    fs::create_dir(&source_folder).unwrap();

    // Payload with enough variety that Deflate actually transforms it.
    let payload: Vec<u8> = (0..200_000u32).flat_map(|i| i.to_le_bytes()).collect();
    let demo = common::write_demo(&source_folder, "match1.dem", &payload);

    let result = compress_demo(&demo).unwrap();
    assert_eq!(result.original_size, payload.len() as u64);

    let fresh_folder = dir.path().join("fresh");
    fs::create_dir(&fresh_folder).unwrap();
    let outcomes = ingest_paths(&[source_folder.join("match1.zip")], &fresh_folder);

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].status, IngestStatus::Extracted { demos: 1 });
    assert_eq!(fs::read(fresh_folder.join("match1.dem")).unwrap(), payload);
}

// A mixed drop batch: [a.dem, b.txt, c.zip]. The listing after the batch
// reflects the disk, sorted by byte value.
#[test]
fn mixed_batch_then_rescan_reflects_disk() {
    common::init_logging();
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("demos");
    fs::create_dir(&folder).unwrap();
    let inbox = dir.path().join("inbox");
    fs::create_dir(&inbox).unwrap();

    let a = common::write_demo(&inbox, "a.dem", b"demo a");
    let b = inbox.join("b.txt");
    fs::write(&b, b"text").unwrap();
    let c = common::create_test_zip(&inbox, "c.zip", &[("rounds/c1.dem", b"demo c1")]);

    let outcomes = ingest_paths(&[a, b, c], &folder);

    let failures: Vec<_> = outcomes
        .iter()
        .filter(|o| matches!(o.status, IngestStatus::Failed(_)))
        .collect();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].source.ends_with("b.txt"));

    let names: Vec<String> = scan_folder(&folder).into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["a.dem", "c1.dem"]);
}

#[tokio::test]
async fn background_compress_result_matches_disk() {
    common::init_logging();
    let dir = TempDir::new().unwrap();
    let demo = common::write_demo(dir.path(), "match1.dem", &vec![0xA5u8; 100_000]);

    let result = compress_demo_task(demo).await.unwrap();

    let zip_path = dir.path().join("match1.zip");
    assert_eq!(
        result.compressed_size,
        fs::metadata(&zip_path).unwrap().len()
    );

    // The new archive is part of the managed listing on the next scan.
    let files = scan_folder(dir.path());
    assert_eq!(files.len(), 2);
    assert_eq!(files[1].name, "match1.zip");
    assert_eq!(files[1].kind, FileKind::Archive);
}
