//! Prompt templates.
//!
//! Three pure template builders plus the registry metadata the MCP prompt
//! surface serves. The templates are static text aside from the table name
//! interpolated into [`analyze_table`]; no database access happens here.

use rmcp::model::{Prompt, PromptArgument};

/// Stable prompt names, as advertised by `prompts/list`.
pub const ANALYZE_TABLE: &str = "analyze_table";
pub const FIND_RELATIONSHIPS: &str = "find_relationships";
pub const DATA_QUALITY_CHECK: &str = "data_quality_check";

/// Build the guided-analysis prompt for a single table.
///
/// The table name is interpolated verbatim; templates are text, not SQL, so
/// no quoting or validation applies.
pub fn analyze_table(table_name: &str) -> String {
    format!(
        "Please analyze the table '{table_name}' in the database.\n\
         \n\
         1. First, get the table schema to understand its structure\n\
         2. Get table statistics to understand its size and distribution\n\
         3. Examine a sample of rows to understand the data\n\
         4. Provide insights about:\n\
         \x20  - Data quality\n\
         \x20  - Potential issues or anomalies\n\
         \x20  - Interesting patterns or trends\n\
         \x20  - Suggestions for optimization\n\
         \n\
         Use the available tools to gather this information."
    )
}

/// Build the relationship-discovery prompt. Takes no arguments.
pub fn find_relationships() -> String {
    "Please analyze the database to find relationships between tables.\n\
     \n\
     1. List all tables in the database\n\
     2. Examine the schemas of each table\n\
     3. Look for:\n\
     \x20  - Foreign key columns (typically ending in _id)\n\
     \x20  - Common column names across tables\n\
     \x20  - Potential join conditions\n\
     4. Create a summary of the database structure showing:\n\
     \x20  - How tables relate to each other\n\
     \x20  - The data model hierarchy\n\
     \x20  - Any missing relationships that should exist\n\
     \n\
     Use the available tools to gather this information."
        .to_string()
}

/// Build the data-quality audit prompt. Takes no arguments.
pub fn data_quality_check() -> String {
    "Please perform a comprehensive data quality check on the database.\n\
     \n\
     For each table:\n\
     1. Check for NULL values in important columns\n\
     2. Look for duplicate records\n\
     3. Verify data types are appropriate\n\
     4. Check for outliers or anomalous values\n\
     5. Examine value distributions\n\
     \n\
     Provide a summary report highlighting any data quality issues found\n\
     and recommendations for improvement.\n\
     \n\
     Use the available tools to gather this information."
        .to_string()
}

/// Registry metadata for `prompts/list`, in a fixed order.
pub fn prompt_list() -> Vec<Prompt> {
    vec![
        Prompt::new(
            ANALYZE_TABLE,
            Some("Generate a prompt for analyzing a table"),
            Some(vec![PromptArgument {
                name: "table_name".to_string(),
                title: None,
                description: Some("Name of the table to analyze".to_string()),
                required: Some(true),
            }]),
        ),
        Prompt::new(
            FIND_RELATIONSHIPS,
            Some("Generate a prompt for finding table relationships"),
            None,
        ),
        Prompt::new(
            DATA_QUALITY_CHECK,
            Some("Generate a prompt for checking data quality"),
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_table_interpolates_name() {
        let text = analyze_table("users");
        assert!(text.contains("the table 'users'"));
        assert!(text.ends_with("Use the available tools to gather this information."));
    }

    #[test]
    fn test_analyze_table_name_is_verbatim() {
        // Templates are text, not SQL; nothing is quoted or escaped
        let text = analyze_table("odd\"name");
        assert!(text.contains("'odd\"name'"));
    }

    #[test]
    fn test_parameterless_prompts_are_deterministic() {
        assert_eq!(find_relationships(), find_relationships());
        assert_eq!(data_quality_check(), data_quality_check());
        assert!(find_relationships().contains("relationships between tables"));
        assert!(data_quality_check().contains("data quality check"));
    }

    #[test]
    fn test_prompt_list_is_stable() {
        let prompts = prompt_list();
        let names: Vec<&str> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [ANALYZE_TABLE, FIND_RELATIONSHIPS, DATA_QUALITY_CHECK]
        );

        let args = prompts[0].arguments.as_ref().unwrap();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "table_name");
        assert_eq!(args[0].required, Some(true));
        assert!(prompts[1].arguments.is_none());
        assert!(prompts[2].arguments.is_none());
    }
}
