//! Example posts loaded at startup so the first GET returns something.

use blog_core::domain::NewPost;

const LOREM: &str = "Amet ullamco velit veniam magna enim reprehenderit in laboris commodo et. \
Et ipsum et aliqua nulla incididunt sunt aliqua veniam occaecat nisi irure deserunt. \
Sunt labore nisi et incididunt aute mollit in ullamco.";

/// The two example posts, in the order they are stored.
pub fn seed_posts() -> Vec<NewPost> {
    vec![
        NewPost::new("Why I have never eaten a toad", LOREM, "No Toad"),
        NewPost::new(
            "All work and no play makes Jack a dull boy",
            LOREM,
            "Shine On Me",
        ),
    ]
}
