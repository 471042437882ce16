//! Snapshot documents shared by the CLI tests.

/// Three direct checks (good, recommended, one without a result), one async
/// check, and four info sections.
pub const SITE_SNAPSHOT: &str = r#"{
  "tests": {
    "direct": {
      "php_version": { "label": "PHP Version", "test": "php_version" },
      "sql_server": { "label": "Database Server version", "test": "sql_server" },
      "theme_version": { "label": "Theme Versions", "test": "theme_version" }
    },
    "async": {
      "background_updates": {
        "label": "Background updates",
        "test": "background-updates",
        "async_direct_test": ["WP_Site_Health", "get_test_background_updates"]
      }
    }
  },
  "results": {
    "php_version": {
      "status": "good",
      "label": "Your site is running the current version of PHP (8.2.10)",
      "test": "php_version",
      "description": "<p>PHP is one of the programming languages used to build WordPress.</p>",
      "badge": { "label": "Performance", "color": "blue" }
    },
    "sql_server": {
      "status": "recommended",
      "label": "Outdated SQL server",
      "test": "sql_server",
      "description": "<p>The SQL server is a required piece of software.</p>",
      "badge": { "label": "Performance", "color": "orange" }
    },
    "background_updates": {
      "status": "critical",
      "label": "Background updates are not working as expected",
      "test": "background_updates",
      "description": "<p>Background updates ensure that WordPress can auto-update.</p>",
      "badge": { "label": "Security", "color": "red" }
    }
  },
  "debug_data": {
    "wp-core": {
      "label": "WordPress",
      "fields": {
        "version": { "label": "Version", "value": "6.5.2", "debug": "6.5.2" },
        "site_language": { "label": "Site Language", "value": "English (United States)", "debug": "en_US" }
      }
    },
    "wp-constants": {
      "label": "WordPress Constants",
      "fields": {
        "WP_HOME": { "label": "WP_HOME", "value": "Undefined", "debug": "undefined" },
        "DB_PASSWORD": { "label": "DB_PASSWORD", "value": "hunter2", "private": true }
      }
    },
    "wp-paths-sizes": {
      "label": "Directories and Sizes",
      "fields": {
        "uploads_size": { "label": "Uploads Directory Size", "value": "Loading...", "debug": "loading..." }
      }
    },
    "wp-server": {
      "label": "Server",
      "fields": {}
    }
  },
  "sizes": {
    "uploads_size": { "size": "12.50 MB", "debug": "13107200 bytes" }
  }
}"#;

/// A snapshot with checks only; one of three is critical.
pub const CRITICAL_SNAPSHOT: &str = r#"{
  "tests": {
    "direct": {
      "a": { "label": "A", "test": "a" },
      "b": { "label": "B", "test": "b" },
      "c": { "label": "C", "test": "c" }
    }
  },
  "results": {
    "a": { "status": "critical", "label": "A broke", "test": "a", "badge": { "label": "Security" } },
    "b": { "status": "critical", "label": "B broke", "test": "b", "badge": { "label": "Security" } },
    "c": { "status": "good", "label": "C fine", "test": "c", "badge": { "label": "Security" } }
  }
}"#;

/// A snapshot with no registered checks.
pub const EMPTY_SNAPSHOT: &str = r#"{ "tests": {}, "debug_data": {} }"#;
