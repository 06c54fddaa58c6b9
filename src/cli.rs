//! Command-line interface definition using clap.

use clap::Parser;

/// Analyze a WhatsApp chat export: statistics, timelines, and activity maps.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --after 2024-01-01 --before 2024-06-30
    chatlens chat.txt --stopwords stop_words.txt --top-words 20
    chatlens chat.txt --report report.json --export records.csv")]
pub struct Args {
    /// Path to the WhatsApp TXT export
    pub input: String,

    /// Analyze a single participant instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Stopword file (whitespace-separated tokens); missing file is fine
    #[arg(long, value_name = "PATH", default_value = "stop_words.txt")]
    pub stopwords: String,

    /// Only include messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only include messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Number of ranked words to display
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub top_words: usize,

    /// Number of ranked emoji to display
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub top_emoji: usize,

    /// Write the full analysis report to a JSON file
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<String>,

    /// Export parsed records to a CSV file (';' delimiter)
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<String>,
}
