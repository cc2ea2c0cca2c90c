//! Read-only statement validation.
//!
//! A statement is accepted iff, after trimming surrounding whitespace, it
//! begins with `SELECT`, `WITH`, or `SHOW` (case-insensitive; the original
//! casing is preserved for execution). Everything else — including
//! statements hidden behind leading comments — is rejected.
//!
//! This is a lexical prefix check, not a parser. It guards a well-behaved
//! caller against accidental mutating statements; it is not a security
//! boundary against an adversary with direct SQL access, and it does not
//! inspect anything after the first keyword. That limitation is deliberate
//! and documented; tightening it would change observable behavior for
//! edge-case inputs.

/// Leading keywords accepted as read-only.
pub const READ_ONLY_PREFIXES: [&str; 3] = ["SELECT", "WITH", "SHOW"];

/// The rejection reason reported for non-read-only statements.
pub const READ_ONLY_VIOLATION: &str = "Only SELECT, WITH, and SHOW queries are allowed";

/// Check a raw statement for read-only intent.
///
/// Rejection is a normal, reportable outcome carried in `Err(reason)`; it is
/// the caller's job to shape it into an error envelope. No exception, no
/// fault.
pub fn check_read_only(sql: &str) -> Result<(), &'static str> {
    let upper = sql.trim().to_uppercase();
    if READ_ONLY_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
    {
        Ok(())
    } else {
        Err(READ_ONLY_VIOLATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_accepted() {
        assert!(check_read_only("SELECT * FROM users").is_ok());
        assert!(check_read_only("select 1").is_ok());
    }

    #[test]
    fn test_with_and_show_accepted() {
        assert!(check_read_only("WITH t AS (SELECT 1) SELECT * FROM t").is_ok());
        assert!(check_read_only("show server_version").is_ok());
    }

    #[test]
    fn test_leading_whitespace_trimmed() {
        assert!(check_read_only("   \n\t SELECT 1").is_ok());
    }

    #[test]
    fn test_writes_rejected() {
        for sql in [
            "INSERT INTO users VALUES (1)",
            "UPDATE users SET name = 'x'",
            "DELETE FROM users",
            "DROP TABLE users",
            "TRUNCATE users",
            "CREATE TABLE t (id INT)",
        ] {
            assert_eq!(check_read_only(sql), Err(READ_ONLY_VIOLATION));
        }
    }

    #[test]
    fn test_comment_prefixed_statement_rejected() {
        // The guard does not skip comments; a commented SELECT is rejected
        assert!(check_read_only("-- note\nSELECT 1").is_err());
        assert!(check_read_only("/* hidden */ DELETE FROM users").is_err());
    }

    #[test]
    fn test_empty_statement_rejected() {
        assert!(check_read_only("").is_err());
        assert!(check_read_only("   ").is_err());
    }

    #[test]
    fn test_prefix_check_is_lexical_only() {
        // Documented limitation: the guard looks at the leading keyword only,
        // so a piggybacked second statement slips through here and is left
        // to the engine / database permissions.
        assert!(check_read_only("SELECT 1; DELETE FROM users").is_ok());
    }
}
