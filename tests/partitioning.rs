//! Partitioner properties: membership, ordering, stability.
use copyplan::partition_copyable_files;
use copyplan::types::CopyableFile;

fn file(set: &str, name: &str) -> CopyableFile {
    CopyableFile::new(set, format!("/src/{name}"), format!("/dst/{name}"))
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(partition_copyable_files(Vec::new()).is_empty());
}

#[test]
fn every_file_lands_in_exactly_one_matching_partition() {
    let files = vec![
        file("p1", "a"),
        file("p2", "b"),
        file("p1", "c"),
        file("p3", "d"),
        file("p2", "e"),
    ];
    let partitions = partition_copyable_files(files.clone());

    assert_eq!(partitions.len(), 3);
    let total: usize = partitions.iter().map(|p| p.files().len()).sum();
    assert_eq!(total, files.len());
    for partition in &partitions {
        for f in partition.files() {
            assert_eq!(f.file_set, partition.name());
        }
    }
}

#[test]
fn discovery_order_is_preserved_within_partitions() {
    let files = vec![
        file("p1", "a"),
        file("p2", "b"),
        file("p1", "c"),
        file("p1", "e"),
    ];
    let partitions = partition_copyable_files(files);

    let p1 = partitions.iter().find(|p| p.name() == "p1").unwrap();
    let origins: Vec<_> = p1.files().iter().map(|f| f.origin.clone()).collect();
    assert_eq!(origins, ["/src/a", "/src/c", "/src/e"].map(std::path::PathBuf::from));
}

#[test]
fn partitions_come_out_in_first_seen_order() {
    let files = vec![file("late", "a"), file("early", "b"), file("late", "c")];
    let names: Vec<String> = partition_copyable_files(files)
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, ["late", "early"]);
}
