//! trackpaint - inspect blocked paint segment tables
//!
//! Looks up the segments a track piece blocks, lists pieces, and exports or
//! checks table documents.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use trackpaint::config::AppConfig;
use trackpaint_core::{
    block_segments_for_track_sequence, blocked_segments, get_should_invert_pre_post_call,
    segment_entry, BlockedSegmentsFile, BlockedSegmentsType, BuiltinSegments, Direction,
    PaintSegment, PaintSession, SegmentEntry, SegmentMask, TableValidator, TrackElemType,
    ValidationError, INVERT_PRE_POST_TABLE,
};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the segments a piece sequence blocks
    Lookup {
        /// Track piece name, e.g. LeftQuarterTurn5Tiles
        #[arg(long, short)]
        elem: TrackElemType,
        /// Sequence index within the piece
        #[arg(long, short, default_value_t = 0)]
        sequence: u8,
        /// Direction the piece is placed in (0-3)
        #[arg(long, short, default_value_t = 0)]
        direction: Direction,
        /// Paint variant; defaults to the configured variant
        #[arg(long, short)]
        variant: Option<BlockedSegmentsType>,
    },
    /// List every piece with its ordinal and sequence count
    Pieces,
    /// Write the compiled tables as a RON document
    Export {
        /// Output path; defaults to the configured export path
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Validate the compiled tables, or a RON document
    Check {
        /// Document to validate instead of the compiled tables
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let result = match args.command {
        Command::Lookup { elem, sequence, direction, variant } => {
            lookup(elem, sequence, direction, variant.unwrap_or(config.table.default_variant))
        }
        Command::Pieces => {
            list_pieces();
            Ok(())
        }
        Command::Export { out } => {
            let path = out.unwrap_or_else(|| PathBuf::from(&config.table.export_path));
            export(&path, config.table.pretty)
        }
        Command::Check { file } => check(file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            log::error!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn lookup(
    elem: TrackElemType,
    sequence: u8,
    direction: Direction,
    variant: BlockedSegmentsType,
) -> Result<(), String> {
    let seq = sequence as usize;
    if !elem.has_sequence(seq) {
        return Err(format!(
            "{} has {} sequences, sequence {} is out of range",
            elem,
            elem.sequence_count(),
            sequence
        ));
    }

    let entry = segment_entry(variant, elem, seq);
    let rotated = blocked_segments(variant, elem, seq, direction);

    println!("{} sequence {} ({}, direction {})", elem, sequence, variant, direction);
    match entry {
        SegmentEntry::Blocked(mask) => println!("  entry:    {}", format_mask(mask)),
        SegmentEntry::Unimplemented => println!("  entry:    unimplemented"),
    }
    println!("  rotated:  {}", format_mask(rotated));
    println!(
        "  invert pre/post call: {}",
        get_should_invert_pre_post_call(elem, seq)
    );

    let mut session = PaintSession::new();
    block_segments_for_track_sequence(&mut session, sequence, direction, 0, elem, variant);
    println!("  support heights:");
    for segment in PaintSegment::ALL {
        let support = session.segment_support(segment);
        let state = if support.is_blocked() { "blocked" } else { "open" };
        println!("    {:<12} {}", format!("{:?}", segment), state);
    }

    Ok(())
}

fn list_pieces() {
    for elem in TrackElemType::ALL {
        println!("{:>3}  {:<44} {}", elem.ordinal(), elem.name(), elem.sequence_count());
    }
}

fn export(path: &Path, pretty: bool) -> Result<(), String> {
    let file = BlockedSegmentsFile::builtin();
    file.save(path, pretty)
        .map_err(|e| format!("Failed to export {}: {}", path.display(), e))?;
    log::info!("Exported {} variant tables to {}", file.variants.len(), path.display());
    Ok(())
}

fn check(file: Option<PathBuf>) -> Result<(), String> {
    let errors = match file {
        Some(path) => {
            let document = BlockedSegmentsFile::load(&path)
                .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
            let table = document
                .to_table()
                .map_err(|e| format!("Invalid table document {}: {}", path.display(), e))?;
            log::info!("Checking {}", path.display());
            TableValidator::validate(&table)
        }
        None => {
            log::info!("Checking compiled tables");
            let mut errors = TableValidator::validate(&BuiltinSegments);
            errors.extend(TableValidator::validate_invert_table(&INVERT_PRE_POST_TABLE));
            errors
        }
    };

    report(&errors)
}

fn report(errors: &[ValidationError]) -> Result<(), String> {
    for error in errors {
        log::warn!("Validation error: {}", error);
    }
    if errors.is_empty() {
        println!("No problems found");
        Ok(())
    } else {
        Err(format!("{} validation errors", errors.len()))
    }
}

/// Segment names of a mask, e.g. `TopRight | BottomLeft | Centre`
fn format_mask(mask: SegmentMask) -> String {
    if mask.is_empty() {
        return "none".to_string();
    }
    if mask == SegmentMask::ALL {
        return "all".to_string();
    }
    mask.segments()
        .map(|segment| format!("{:?}", segment))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mask() {
        assert_eq!(format_mask(SegmentMask::NONE), "none");
        assert_eq!(format_mask(SegmentMask::ALL), "all");
        assert_eq!(
            format_mask(SegmentMask::CENTRE | SegmentMask::TOP_RIGHT),
            "TopRight | Centre"
        );
    }

    #[test]
    fn test_lookup_rejects_out_of_range_sequence() {
        let err = lookup(TrackElemType::Flat, 3, 0, BlockedSegmentsType::Narrow).unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn test_args_parse_lookup() {
        let args = Args::try_parse_from([
            "trackpaint",
            "lookup",
            "--elem",
            "LeftQuarterTurn3Tiles",
            "--sequence",
            "3",
            "--variant",
            "wide",
        ])
        .unwrap();
        match args.command {
            Command::Lookup { elem, sequence, direction, variant } => {
                assert_eq!(elem, TrackElemType::LeftQuarterTurn3Tiles);
                assert_eq!(sequence, 3);
                assert_eq!(direction, 0);
                assert_eq!(variant, Some(BlockedSegmentsType::Wide));
            }
            other => panic!("Expected lookup, got {:?}", other),
        }
    }

    #[test]
    fn test_export_writes_loadable_document() {
        let path = std::env::temp_dir().join("trackpaint_cli_export_test.ron");
        export(&path, true).unwrap();
        let loaded = BlockedSegmentsFile::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, BlockedSegmentsFile::builtin());
    }

    #[test]
    fn test_export_reports_write_failure() {
        let err = export(Path::new("does/not/exist/tables.ron"), false).unwrap_err();
        assert!(err.contains("Failed to export"));
    }

    #[test]
    fn test_check_rejects_repeated_inversion_row() {
        let path = std::env::temp_dir().join("trackpaint_cli_check_test.ron");
        let mut document = BlockedSegmentsFile::builtin();
        let row = document.invert_pre_post[0].clone();
        document.invert_pre_post.push(row);
        document.save(&path, false).unwrap();
        let result = check(Some(path.clone()));
        std::fs::remove_file(&path).ok();
        assert!(result.unwrap_err().contains("More than one inversion row"));
    }

    #[test]
    fn test_report_counts_errors() {
        let errors = vec![ValidationError::InvertOutOfRange {
            track_elem: TrackElemType::Flat,
            sequence: 1,
        }];
        assert_eq!(report(&errors).unwrap_err(), "1 validation errors");
        assert!(report(&[]).is_ok());
    }
}
