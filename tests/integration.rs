//! End-to-end tests for lzhuff.
//!
//! Exercises the full compress/decompress pipeline and the command-line binary.

use std::process::Command;

use lzhuff::{
    compress, compress_with_config, compress_with_stats, container, decompress, huffman, lz77,
    CodeTable, Error, Lz77Config, Token,
};

// ============================================================================
// Test Data Generators
// ============================================================================

/// Generate random data using a simple PRNG
fn generate_random_data(size: usize, seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state = seed;
    for _ in 0..size {
        // Simple xorshift PRNG
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        data.push((state & 0xFF) as u8);
    }
    data
}

/// Generate highly repetitive data
fn generate_repetitive_data(size: usize) -> Vec<u8> {
    let pattern = b"ABCDABCDABCDABCD";
    pattern.iter().cycle().take(size).copied().collect()
}

/// Generate English-like text from a small vocabulary
fn generate_text(size: usize, seed: u64) -> Vec<u8> {
    const WORDS: [&str; 24] = [
        "the", "of", "and", "to", "in", "is", "that", "it", "was", "for", "on", "are", "with",
        "as", "they", "be", "at", "one", "have", "this", "from", "word", "but", "what",
    ];

    let mut data = Vec::with_capacity(size + 16);
    let mut state = seed;
    let mut words_in_sentence = 0;
    while data.len() < size {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        data.extend_from_slice(WORDS[(state % WORDS.len() as u64) as usize].as_bytes());
        words_in_sentence += 1;
        if words_in_sentence == 9 {
            data.extend_from_slice(b". ");
            words_in_sentence = 0;
        } else {
            data.push(b' ');
        }
    }
    data.truncate(size);
    data
}

fn assert_roundtrip(data: &[u8]) {
    let compressed = compress(data).unwrap();
    assert_eq!(decompress(&compressed).unwrap(), data);
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_roundtrip_empty() {
    let compressed = compress(b"").unwrap();
    assert!(compressed.len() < 32, "empty input produced {} bytes", compressed.len());
    assert!(decompress(&compressed).unwrap().is_empty());
}

#[test]
fn test_roundtrip_single_byte() {
    for byte in [0x00, 0x01, 0x42, 0xFF] {
        assert_roundtrip(&[byte]);
    }
}

#[test]
fn test_roundtrip_random() {
    assert_roundtrip(&generate_random_data(20_000, 12345));
}

#[test]
fn test_roundtrip_repetitive() {
    let data = generate_repetitive_data(50_000);
    let (compressed, stats) = compress_with_stats(&data, &Lz77Config::default()).unwrap();
    assert_eq!(decompress(&compressed).unwrap(), data);
    assert!(compressed.len() < data.len() / 10);
    assert!(stats.match_tokens > stats.literal_tokens);
}

#[test]
fn test_roundtrip_all_byte_values() {
    let data: Vec<u8> = (0..=255).cycle().take(2048).collect();
    assert_roundtrip(&data);
}

#[test]
fn test_roundtrip_single_symbol() {
    assert_roundtrip(&[0x01; 1000]);
    assert_roundtrip(&[0x00; 257]);
}

#[test]
fn test_roundtrip_sentinel_at_end() {
    assert_roundtrip(b"abc\x01abc\x01");
    assert_roundtrip(b"abcabc\x01");
    assert_roundtrip(b"\x01\x01");
    assert_roundtrip(b"xyzxyz\x01\x01\x01");
}

#[test]
fn test_roundtrip_window_configs() {
    let data = generate_text(4096, 7);
    for (window, preview) in [(1, 1), (4, 255), (255, 4), (31, 31), (255, 255)] {
        let config = Lz77Config::new(window, preview).unwrap();
        let compressed = compress_with_config(&data, &config).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data, "window {} preview {}", window, preview);
    }
}

#[test]
fn test_roundtrip_short_input_default_windows() {
    // Shorter than both windows; history clamps to what exists
    assert_roundtrip(b"abcab");
    assert_roundtrip(b"mississippi");
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_run_scenario() {
    let config = Lz77Config::default();
    let tokens: Vec<Token> = lz77::tokens(b"aaaaaa", &config).unwrap().collect();
    assert_eq!(
        tokens,
        vec![Token::Literal(b'a'), Token::Match { offset: 1, length: 5, next: None }]
    );

    let compressed = compress_with_config(b"aaaaaa", &config).unwrap();
    assert_eq!(decompress(&compressed).unwrap(), b"aaaaaa");
}

#[test]
fn test_natural_text_compresses() {
    let data = generate_text(10 * 1024, 2024);
    let (compressed, stats) = compress_with_stats(&data, &Lz77Config::default()).unwrap();
    assert_eq!(decompress(&compressed).unwrap(), data);
    assert!(
        stats.output_bytes < stats.input_bytes,
        "{} bytes grew to {}",
        stats.input_bytes,
        stats.output_bytes
    );
    assert!(stats.space_savings_percent() > 0.0);
}

#[test]
fn test_distinct_bytes_are_literals() {
    let data: Vec<u8> = (0..=255).collect();
    let config = Lz77Config::new(255, 255).unwrap();
    let tokens: Vec<Token> = lz77::tokens(&data, &config).unwrap().collect();
    assert!(tokens.iter().all(Token::is_literal));
    assert_roundtrip(&data);
}

// ============================================================================
// Stage Properties
// ============================================================================

#[test]
fn test_lz77_roundtrip_without_entropy_coding() {
    let config = Lz77Config::new(64, 32).unwrap();
    for seed in 1..6 {
        let data = generate_text(3000, seed);
        let flat = lz77::compress(&data, &config).unwrap();
        assert_eq!(lz77::reconstruct(&flat).unwrap(), data);
    }
}

#[test]
fn test_huffman_tables_prefix_free() {
    for seed in 1..6 {
        let data = generate_random_data(5000, seed);
        assert!(CodeTable::from_bytes(&data).is_prefix_free());
        let text = generate_text(5000, seed);
        assert!(CodeTable::from_bytes(&text).is_prefix_free());
    }
}

#[test]
fn test_container_roundtrip() {
    let flat = lz77::compress(&generate_text(2000, 3), &Lz77Config::default()).unwrap();
    let table = CodeTable::from_bytes(&flat);
    let bits = huffman::encode(&flat, &table).unwrap();

    let packed = container::pack(&bits, &table).unwrap();
    let (unpacked_bits, unpacked_table) = container::unpack(&packed).unwrap();
    assert_eq!(unpacked_bits, bits);
    assert_eq!(unpacked_table, table);
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_truncated_container() {
    let compressed = compress(&generate_text(1000, 5)).unwrap();
    assert!(decompress(&compressed[..3]).is_err());
    assert!(decompress(&compressed[..20]).is_err());
}

#[test]
fn test_corrupt_back_reference() {
    // Hand-built token stream: literal 'a', then a match reaching 9 bytes back
    let flat = [128, 64, 0x01, 0, 0, b'a', 9, 2, b'b'];
    let table = CodeTable::from_bytes(&flat);
    let bits = huffman::encode(&flat, &table).unwrap();
    let packed = container::pack(&bits, &table).unwrap();

    let err = decompress(&packed).unwrap_err();
    assert!(matches!(err, Error::CorruptStream { token: 2, .. }), "unexpected error: {}", err);
}

#[test]
fn test_invalid_configuration() {
    let err = Lz77Config::new(256, 64).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}

// ============================================================================
// Binary CLI Tests
// ============================================================================

fn lzhuff() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lzhuff"))
}

#[test]
fn test_cli_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("input.txt");
    let packed = dir.path().join("input.lzh");
    let restored = dir.path().join("restored.txt");

    let data = generate_text(8192, 99);
    std::fs::write(&original, &data).unwrap();

    let status = lzhuff().arg("-c").arg(&original).arg(&packed).status().unwrap();
    assert!(status.success());

    let status = lzhuff().arg("-d").arg(&packed).arg(&restored).status().unwrap();
    assert!(status.success());

    assert_eq!(std::fs::read(&restored).unwrap(), data);
}

#[test]
fn test_cli_custom_windows() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("input.bin");
    let packed = dir.path().join("input.lzh");
    let restored = dir.path().join("restored.bin");

    let data = generate_repetitive_data(4000);
    std::fs::write(&original, &data).unwrap();

    let status = lzhuff()
        .args(["--window", "31", "--preview", "17", "-c"])
        .arg(&original)
        .arg(&packed)
        .status()
        .unwrap();
    assert!(status.success());

    let status = lzhuff().arg("-d").arg(&packed).arg(&restored).status().unwrap();
    assert!(status.success());
    assert_eq!(std::fs::read(&restored).unwrap(), data);
}

#[test]
fn test_cli_requires_mode() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, b"hello").unwrap();

    let output = lzhuff().arg(&input).arg(dir.path().join("out")).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_rejects_both_modes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, b"hello").unwrap();

    let output =
        lzhuff().args(["-c", "-d"]).arg(&input).arg(dir.path().join("out")).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = lzhuff()
        .arg("-c")
        .arg(dir.path().join("does-not-exist"))
        .arg(dir.path().join("out"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[test]
fn test_cli_invalid_window() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, b"hello").unwrap();

    let output = lzhuff()
        .args(["-c", "--window", "300"])
        .arg(&input)
        .arg(dir.path().join("out"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_decompress_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("garbage.lzh");
    std::fs::write(&input, generate_random_data(100, 1)).unwrap();

    let output = lzhuff().arg("-d").arg(&input).arg(dir.path().join("out")).output().unwrap();
    assert!(!output.status.success());
}
