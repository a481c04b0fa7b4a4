use timecalc::epoch::{self, EpochSystem, NumericTimestamp};
use timecalc::error::ConvertError;
use timecalc::parser::TimestampParser;

const FMT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[test]
fn test_unix_to_string_utc() {
    assert_eq!(
        epoch::unix_to_string(0.0, FMT, Some("UTC")).unwrap(),
        "1970-01-01 00:00:00.000000"
    );
    assert_eq!(
        epoch::unix_to_string(0.25, FMT, Some("UTC")).unwrap(),
        "1970-01-01 00:00:00.250000"
    );
    assert_eq!(
        epoch::unix_to_string(-0.25, FMT, Some("UTC")).unwrap(),
        "1969-12-31 23:59:59.750000"
    );
}

#[test]
fn test_unix_to_string_named_timezone() {
    assert_eq!(
        epoch::unix_to_string(0.0, FMT, Some("Asia/Shanghai")).unwrap(),
        "1970-01-01 08:00:00.000000"
    );
}

#[test]
fn test_unix_to_string_rejects_bad_timezone() {
    assert!(matches!(
        epoch::unix_to_string(0.0, FMT, Some("Mars/Olympus")),
        Err(ConvertError::InvalidTimezone(_))
    ));
}

#[test]
fn test_unix_to_string_rejects_bad_format() {
    assert!(matches!(
        epoch::unix_to_string(0.0, "%Q", Some("UTC")),
        Err(ConvertError::InvalidFormat(_))
    ));
}

#[test]
fn test_unix_to_string_rejects_out_of_range() {
    assert!(matches!(
        epoch::unix_to_string(f64::NAN, FMT, Some("UTC")),
        Err(ConvertError::OutOfRange(_))
    ));
    assert!(matches!(
        epoch::unix_to_string(1e30, FMT, Some("UTC")),
        Err(ConvertError::OutOfRange(_))
    ));
}

#[test]
fn test_windows_epoch_offset_is_unix_epoch() {
    // 116444736000000000 ticks separate 1601 from 1970
    assert_eq!(
        epoch::windows_to_string(116_444_736_000_000_000, FMT, Some("UTC")).unwrap(),
        "1970-01-01 00:00:00.000000"
    );
}

#[test]
fn test_windows_tick_zero_is_1601() {
    assert_eq!(
        epoch::windows_to_string(0, FMT, Some("UTC")).unwrap(),
        "1601-01-01 00:00:00.000000"
    );

    let mut parser = TimestampParser::new();
    assert_eq!(
        epoch::string_to_windows(&mut parser, "1601-01-01 00:00:00", Some("UTC")).unwrap(),
        0
    );
}

#[test]
fn test_windows_to_string_with_fraction() {
    // 9876543210 ticks past the offset is 987.654321 seconds
    assert_eq!(
        epoch::windows_to_string(116_444_736_000_000_000 + 9_876_543_210, FMT, Some("UTC")).unwrap(),
        "1970-01-01 00:16:27.654321"
    );
}

#[test]
fn test_windows_sub_microsecond_ticks_round() {
    let base = 116_444_736_000_000_000;
    assert_eq!(
        epoch::windows_to_string(base + 7, FMT, Some("UTC")).unwrap(),
        "1970-01-01 00:00:00.000001"
    );
    assert_eq!(
        epoch::windows_to_string(base + 4, FMT, Some("UTC")).unwrap(),
        "1970-01-01 00:00:00.000000"
    );
}

#[test]
fn test_string_to_unix() {
    let mut parser = TimestampParser::new();

    assert_eq!(
        epoch::string_to_unix(&mut parser, "1970-01-01 00:00:00", Some("UTC")).unwrap(),
        0.0
    );
    // Wall-clock fields reinterpreted in the target zone, not converted
    assert_eq!(
        epoch::string_to_unix(&mut parser, "1970-01-01 00:00:00", Some("Asia/Shanghai")).unwrap(),
        -28800.0
    );
}

#[test]
fn test_string_to_windows_round_trip() {
    let mut parser = TimestampParser::new();

    let ticks = 116_444_736_000_000_000 + 9_876_543_210;
    let text = epoch::windows_to_string(ticks, FMT, Some("UTC")).unwrap();
    assert_eq!(epoch::string_to_windows(&mut parser, &text, Some("UTC")).unwrap(), ticks);
}

#[test]
fn test_unix_round_trip() {
    let mut parser = TimestampParser::new();

    for secs in [0.0, 1.5, -1.5, 86400.0, 1_700_000_000.123456, -12_345_678.654321] {
        let text = epoch::unix_to_string(secs, FMT, Some("UTC")).unwrap();
        let back = epoch::string_to_unix(&mut parser, &text, Some("UTC")).unwrap();
        assert!((secs - back).abs() < 1e-6, "{} came back as {}", secs, back);
    }
}

#[test]
fn test_string_to_unix_rejects_durations() {
    let mut parser = TimestampParser::new();
    assert!(matches!(
        epoch::string_to_unix(&mut parser, "42.5", Some("UTC")),
        Err(ConvertError::DurationNotConvertible)
    ));
}

#[test]
fn test_string_to_unix_nonexistent_local_time() {
    let mut parser = TimestampParser::new();

    // 2:30 never happens on the 2024 spring-forward night in New York
    assert!(matches!(
        epoch::string_to_unix(&mut parser, "2024-03-10 02:30:00", Some("America/New_York")),
        Err(ConvertError::NonexistentLocalTime(_, _))
    ));
}

#[test]
fn test_string_to_unix_ambiguous_local_time_takes_earlier() {
    let mut parser = TimestampParser::new();

    // 1:30 happens twice on the 2024 fall-back night; the EDT reading wins
    assert_eq!(
        epoch::string_to_unix(&mut parser, "2024-11-03 01:30:00", Some("America/New_York")).unwrap(),
        1_730_611_800.0
    );
}

#[test]
fn test_convert_to_string() {
    assert_eq!(
        epoch::convert_to_string("86400", EpochSystem::Unix, FMT, Some("UTC")).unwrap(),
        "1970-01-02 00:00:00.000000"
    );
    assert!(matches!(
        epoch::convert_to_string("twelve", EpochSystem::Unix, FMT, Some("UTC")),
        Err(ConvertError::NonNumericInput(_))
    ));
}

#[test]
fn test_convert_from_string() {
    let mut parser = TimestampParser::new();

    assert_eq!(
        epoch::convert_from_string(&mut parser, "1970-01-02 00:00:00", EpochSystem::Unix, Some("UTC")).unwrap(),
        NumericTimestamp::Unix(86400.0)
    );
    assert_eq!(
        epoch::convert_from_string(&mut parser, "1970-01-02 00:00:00", EpochSystem::Windows, Some("UTC")).unwrap(),
        NumericTimestamp::Windows(116_445_600_000_000_000)
    );
}

#[test]
fn test_format_numeric() {
    assert_eq!(epoch::format_numeric("0", EpochSystem::Unix).unwrap(), "0.000000");
    assert_eq!(epoch::format_numeric("1.5", EpochSystem::Unix).unwrap(), "1.500000");
    assert_eq!(epoch::format_numeric(" 42 ", EpochSystem::Unix).unwrap(), "42.000000");
    // Windows display drops the fraction
    assert_eq!(epoch::format_numeric("1.5", EpochSystem::Windows).unwrap(), "2");
    assert_eq!(epoch::format_numeric("-3", EpochSystem::Windows).unwrap(), "-3");
    assert!(matches!(
        epoch::format_numeric("twelve", EpochSystem::Unix),
        Err(ConvertError::NonNumericInput(_))
    ));
}

#[test]
fn test_numeric_timestamp_parse() {
    // Large tick counts keep integer precision
    assert_eq!(
        NumericTimestamp::parse("133497696000000007", EpochSystem::Windows).unwrap(),
        NumericTimestamp::Windows(133_497_696_000_000_007)
    );
    // Scientific notation falls back through f64
    assert_eq!(
        NumericTimestamp::parse("1.5e17", EpochSystem::Windows).unwrap(),
        NumericTimestamp::Windows(150_000_000_000_000_000)
    );
    assert!(matches!(
        NumericTimestamp::parse("soon", EpochSystem::Windows),
        Err(ConvertError::NonNumericInput(_))
    ));
}

#[test]
fn test_numeric_timestamp_display() {
    assert_eq!(NumericTimestamp::Unix(1.5).display_string(), "1.500000");
    assert_eq!(NumericTimestamp::Windows(116_444_736_000_000_000).display_string(), "116444736000000000");
}

#[test]
fn test_epoch_system_names() {
    assert_eq!("unix".parse::<EpochSystem>().unwrap(), EpochSystem::Unix);
    assert_eq!("Windows".parse::<EpochSystem>().unwrap(), EpochSystem::Windows);
    assert!("mars".parse::<EpochSystem>().is_err());

    assert_eq!(EpochSystem::Unix.to_string(), "Unix");
    assert_eq!(EpochSystem::Windows.to_string(), "Windows");
}
