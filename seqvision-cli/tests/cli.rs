use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn seqvision() -> Command {
    let mut cmd = Command::cargo_bin("seqvision").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("SEQVISION_INPUT_DIR")
        .env_remove("SEQVISION_OUTPUT_DIR");
    cmd
}

#[test]
fn test_dna_complement() {
    seqvision()
        .args(["dna", "--seq", "ATGC", "--operation", "complement"])
        .assert()
        .success()
        .stdout("TACG\n");
}

#[test]
fn test_dna_revcomp_lowercase_input() {
    seqvision()
        .args(["dna", "--seq", "atgc", "--operation", "revcomp"])
        .assert()
        .success()
        .stdout("GCAT\n");
}

#[test]
fn test_dna_slice_negative_end() {
    seqvision()
        .args(["dna", "--seq", "AATTGGCC", "--operation", "slice", "--slice", "2", "-2"])
        .assert()
        .success()
        .stdout("TTGG\n");
}

#[test]
fn test_rna_complement() {
    seqvision()
        .args(["rna", "--seq", "AUGC", "--operation", "complement"])
        .assert()
        .success()
        .stdout("UACG\n");
}

#[test]
fn test_protein_weight() {
    seqvision()
        .args(["protein", "--seq", "MKWV"])
        .assert()
        .success()
        .stdout("616.78\n");
}

#[test]
fn test_invalid_dna_fails() {
    seqvision()
        .args(["dna", "--seq", "ATGCX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid characters in DNA sequence"));
}

#[test]
fn test_filter_fastq_writes_admitted_records() {
    let temp = tempdir().unwrap();
    let data = temp.path().join("data");
    let out = temp.path().join("filtered");
    std::fs::create_dir(&data).unwrap();
    std::fs::write(
        data.join("reads.fastq"),
        "@good\nACGTACGTAC\n+\nIIIIIIIIII\n@short\nACG\n+\nIII\n",
    )
    .unwrap();

    seqvision()
        .arg("--input-dir")
        .arg(&data)
        .arg("--output-dir")
        .arg(&out)
        .args(["filter-fastq", "--input", "reads.fastq", "--output", "kept.fastq"])
        .args(["--length", "5", "15", "--quality", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept 1 of 2 reads"));

    assert_eq!(
        std::fs::read_to_string(out.join("kept.fastq")).unwrap(),
        "@good\nACGTACGTAC\n+\nIIIIIIIIII\n"
    );
}

#[test]
fn test_filter_fastq_malformed_record_fails() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("bad.fastq");
    std::fs::write(&input, "@r1\nACGT\n+\nIIII\nr2\nACGT\n+\nIIII\n").unwrap();

    seqvision()
        .arg("--output-dir")
        .arg(temp.path())
        .arg("filter-fastq")
        .arg("--input")
        .arg(&input)
        .args(["--output", "out.fastq"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed FASTQ record at line 5"));
}

#[test]
fn test_convert_fasta() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("multi.fasta"), ">s1\nAC\nGT\n").unwrap();

    seqvision()
        .arg("--input-dir")
        .arg(temp.path())
        .arg("--output-dir")
        .arg(temp.path())
        .args(["convert-fasta", "--input", "multi.fasta", "--output", "one.fasta"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(temp.path().join("one.fasta")).unwrap(),
        ">s1\nACGT\n"
    );
}

#[test]
fn test_parse_blast() {
    let temp = tempdir().unwrap();
    std::fs::write(
        temp.path().join("blast.txt"),
        "Description  Name\nzeta protein...  x\nalpha protein...  y\n\n",
    )
    .unwrap();

    seqvision()
        .arg("--input-dir")
        .arg(temp.path())
        .arg("--output-dir")
        .arg(temp.path())
        .args(["parse-blast", "--input", "blast.txt", "--output", "hits.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 descriptions"));

    assert_eq!(
        std::fs::read_to_string(temp.path().join("hits.txt")).unwrap(),
        "alpha protein...\nzeta protein...\n"
    );
}

#[test]
fn test_missing_input_fails() {
    let temp = tempdir().unwrap();
    seqvision()
        .arg("--input-dir")
        .arg(temp.path())
        .arg("--output-dir")
        .arg(temp.path())
        .args(["convert-fasta", "--input", "invalid_file.fasta", "--output", "o.fasta"])
        .assert()
        .failure();
}
