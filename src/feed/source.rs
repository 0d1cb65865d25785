// Feed assembly
//
// Posts come from a TOML feed file when one is configured, otherwise from a
// built-in sample feed so the UI always has something to show.

use super::model::{Author, ContentBlock, Post};
use super::Feed;
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use serde::Deserialize;
use std::path::Path;

/// Root of a feed file
#[derive(Debug, Deserialize)]
struct FeedFile {
    #[serde(default)]
    posts: Vec<Post>,
}

/// Parse feed file contents
pub fn parse_feed(contents: &str) -> Result<Feed> {
    let file: FeedFile = toml::from_str(contents).context("Invalid feed file")?;
    Ok(Feed::new(file.posts))
}

/// Load posts from a feed file on disk
pub fn load_feed(path: &Path) -> Result<Feed> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read feed file {}", path.display()))?;
    let feed = parse_feed(&contents)
        .with_context(|| format!("Failed to load feed from {}", path.display()))?;
    tracing::info!(
        "Loaded {} post(s) from {}",
        feed.posts().len(),
        path.display()
    );
    Ok(feed)
}

/// Built-in sample posts, timestamped relative to `now`
pub fn sample_feed(now: DateTime<Utc>) -> Feed {
    let brt = FixedOffset::west_opt(3 * 3600).unwrap_or_else(|| Utc.fix());

    let posts = vec![
        Post {
            author: Author {
                name: "Marina Alves".to_string(),
                role: "Web Developer".to_string(),
                avatar_url: "https://github.com/marina-alves.png".to_string(),
            },
            published_at: (now - Duration::hours(1)).with_timezone(&brt),
            content: vec![
                ContentBlock::Paragraph("Fala galeraa 👋".to_string()),
                ContentBlock::Paragraph(
                    "Acabei de subir mais um projeto no meu portfólio. É um projeto que fiz \
                     num evento de programação. O nome do projeto é DoctorCare 🚀"
                        .to_string(),
                ),
                ContentBlock::Link("marina.design/doctorcare".to_string()),
                ContentBlock::Link("#novoprojeto #nlw".to_string()),
            ],
        },
        Post {
            author: Author {
                name: "Caio Mendes".to_string(),
                role: "Educator".to_string(),
                avatar_url: "https://github.com/caio-mendes.png".to_string(),
            },
            published_at: (now - Duration::days(2)).with_timezone(&brt),
            content: vec![
                ContentBlock::Paragraph("Fala pessoal 👋".to_string()),
                ContentBlock::Paragraph(
                    "Finalmente terminei meu novo site/portfólio. Foi um baita desafio \
                     criar todo o design e codar na unha, mas consegui 💪🏻"
                        .to_string(),
                ),
                ContentBlock::Link("caio.design".to_string()),
            ],
        },
    ];

    Feed::new(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_posts_in_order() {
        let toml = r#"
[[posts]]
published_at = "2023-01-18T16:47:01-03:00"
author = { name = "Ana", role = "Dev", avatar_url = "https://example.com/a.png" }
content = [
  { type = "paragraph", content = "first" },
  { type = "link", content = "ana.dev" },
]

[[posts]]
published_at = "2023-01-20T10:00:00-03:00"
author = { name = "Bruno", role = "CTO", avatar_url = "https://example.com/b.png" }
content = [{ type = "paragraph", content = "second" }]
"#;
        let feed = parse_feed(toml).unwrap();
        assert_eq!(feed.posts().len(), 2);
        assert_eq!(feed.posts()[0].post().author.name, "Ana");
        assert_eq!(feed.posts()[1].post().content[0].text(), "second");
        // Every post mounts with its placeholder comment
        assert!(feed.posts().iter().all(|p| p.comment_texts() == vec![""]));
    }

    #[test]
    fn empty_file_is_empty_feed() {
        let feed = parse_feed("").unwrap();
        assert!(feed.posts().is_empty());
    }

    #[test]
    fn bad_timestamp_is_an_error() {
        let toml = r#"
[[posts]]
published_at = "yesterday"
author = { name = "Ana", role = "Dev", avatar_url = "x" }
content = []
"#;
        assert!(parse_feed(toml).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_feed(Path::new("/nonexistent/feed.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/feed.toml"));
    }

    #[test]
    fn sample_feed_is_dated_before_now() {
        let now = Utc::now();
        let feed = sample_feed(now);
        assert!(!feed.posts().is_empty());
        for post in feed.posts() {
            assert!(post.post().published_at <= now);
        }
    }
}
