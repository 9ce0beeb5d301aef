//! Static gallery site generation.
//!
//! Pages are rebuilt in full on every run. Album pages are numbered by their
//! 1-based position in the listing at generation time; the number is not a
//! stable identifier across runs.

pub const INDEX_DOCUMENT: &str = "index.html";
pub const ERROR_DOCUMENT: &str = "error.html";

const WEBSITE_DOMAIN: &str = "website.yandexcloud.net";

/// A generated page, keyed at the bucket root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub key: String,
    pub html: String,
}

/// Public website root for a bucket.
pub fn website_url(bucket: &str) -> String {
    format!("https://{bucket}.{WEBSITE_DOMAIN}/")
}

/// Public URL of one photo on the website endpoint.
pub fn photo_url(bucket: &str, album: &str, filename: &str) -> String {
    format!("https://{bucket}.{WEBSITE_DOMAIN}/{album}/{filename}")
}

/// Filename of the page for the album at 1-based position `number`.
pub fn album_page_key(number: usize) -> String {
    format!("album{number}.html")
}

/// Index page: one link per album, in listing order.
pub fn index_page(albums: &[String]) -> Page {
    let links = albums
        .iter()
        .enumerate()
        .map(|(i, album)| {
            format!(
                r#"            <li><a href="{href}">{name}</a></li>"#,
                href = album_page_key(i + 1),
                name = html_escape(album),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Photo archive</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 800px;
            margin: 100px auto;
            padding: 20px;
        }}
        h1 {{
            font-size: 3rem;
            font-weight: 300;
            margin-bottom: 1rem;
        }}
        li {{
            font-size: 1.2rem;
            line-height: 1.8;
        }}
        a {{
            color: #333;
        }}
    </style>
</head>
<body>
    <h1>Photo archive</h1>
    <ul>
{links}
    </ul>
</body>
</html>"#,
    );

    Page {
        key: INDEX_DOCUMENT.to_string(),
        html,
    }
}

/// Fixed error page served for missing paths.
pub fn error_page() -> Page {
    let html = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Not found</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 800px;
            margin: 100px auto;
            padding: 20px;
            text-align: center;
        }
        h1 {
            font-size: 6rem;
            font-weight: 300;
            color: #999;
            margin: 0;
        }
        p {
            font-size: 1.2rem;
            color: #666;
        }
        a {
            color: #333;
        }
    </style>
</head>
<body>
    <h1>404</h1>
    <p>This page does not exist.</p>
    <p><a href="index.html">Back to the archive</a></p>
</body>
</html>"#
        .to_string();

    Page {
        key: ERROR_DOCUMENT.to_string(),
        html,
    }
}

/// Gallery page for one album: every photo's public URL with its basename
/// as caption.
pub fn album_page(bucket: &str, album: &str, number: usize, photos: &[String]) -> Page {
    let items = photos
        .iter()
        .map(|filename| {
            format!(
                r#"        <figure class="photo">
            <img src="{url}" alt="{caption}" loading="lazy">
            <figcaption>{caption}</figcaption>
        </figure>"#,
                url = photo_url(bucket, album, filename),
                caption = html_escape(filename),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - Photo archive</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 1400px;
            margin: 0 auto;
            padding: 40px 20px;
        }}
        h1 {{
            font-size: 2.5rem;
            font-weight: 300;
            text-align: center;
            margin-bottom: 40px;
        }}
        .gallery {{
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 15px;
        }}
        .photo {{
            margin: 0;
            text-align: center;
        }}
        .photo img {{
            display: block;
            height: 300px;
            width: auto;
            object-fit: contain;
            border-radius: 4px;
            background: #f5f5f5;
        }}
        figcaption {{
            font-size: 0.9rem;
            color: #666;
            margin-top: 6px;
        }}
        .back {{
            display: block;
            text-align: center;
            margin-top: 40px;
            color: #333;
        }}
    </style>
</head>
<body>
    <h1>{name}</h1>
    <div class="gallery">
{items}
    </div>
    <a class="back" href="index.html">Back to the archive</a>
</body>
</html>"#,
        name = html_escape(album),
    );

    Page {
        key: album_page_key(number),
        html,
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_links_one_page_per_album_in_listing_order() {
        let albums = vec![
            "winter".to_string(),
            "summer".to_string(),
            "autumn".to_string(),
        ];
        let page = index_page(&albums);

        assert_eq!(page.key, "index.html");
        assert_eq!(page.html.matches("<a href=").count(), albums.len());
        assert!(page.html.contains(r#"<a href="album1.html">winter</a>"#));
        assert!(page.html.contains(r#"<a href="album2.html">summer</a>"#));
        assert!(page.html.contains(r#"<a href="album3.html">autumn</a>"#));
    }

    #[test]
    fn index_with_no_albums_has_no_links() {
        let page = index_page(&[]);
        assert_eq!(page.html.matches("<a href=").count(), 0);
    }

    #[test]
    fn album_page_lists_every_photo_with_public_url_and_caption() {
        let photos = vec!["beach.jpg".to_string(), "sunset.jpeg".to_string()];
        let page = album_page("my-photos", "vacation", 2, &photos);

        assert_eq!(page.key, "album2.html");
        assert_eq!(page.html.matches("<figure").count(), photos.len());
        assert!(page
            .html
            .contains("https://my-photos.website.yandexcloud.net/vacation/beach.jpg"));
        assert!(page.html.contains("<figcaption>sunset.jpeg</figcaption>"));
    }

    #[test]
    fn album_names_are_escaped() {
        let page = index_page(&["cats & <dogs>".to_string()]);
        assert!(page.html.contains("cats &amp; &lt;dogs&gt;"));
    }

    #[test]
    fn error_page_is_fixed() {
        let page = error_page();
        assert_eq!(page.key, "error.html");
        assert_eq!(page, error_page());
    }

    #[test]
    fn website_url_uses_the_bucket_website_endpoint() {
        assert_eq!(
            website_url("my-photos"),
            "https://my-photos.website.yandexcloud.net/"
        );
    }
}
