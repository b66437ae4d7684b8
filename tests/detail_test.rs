use forum_extract::{detail, dom, extract_detail, Options};

const CHECKIN_PAGE: &str = r#"
<html>
<head><title>Weekly Check-in - AcmeForum</title></head>
<body>
  <header class="site-header">
    <nav><a href="/home">Home</a><a href="/explore">Explore</a></nav>
  </header>
  <article>
    <h1 class="post-title">Weekly Check-in</h1>
    <span class="post-author">alice</span>
    <time datetime="2026-07-30T10:00:00Z">2 hours ago</time>
    <div class="post-content">
      <p>Let's discuss recent trends, what has everyone been working on this week? Looking forward to your thoughts.</p>
    </div>
    <section class="comments">
      <div class="comment">I finally got my integration tests green after a week of flakes.</div>
      <div class="comment">Started learning about lock-free queues, it has been humbling.</div>
      <div class="comment">I finally got my integration tests green after a week of flakes.</div>
    </section>
  </article>
  <footer><p>&copy; 2026 AcmeForum</p></footer>
</body>
</html>
"#;

#[test]
fn check_in_page_extracts_every_field() {
    let post = extract_detail(CHECKIN_PAGE, "https://forum.example/post/42")
        .unwrap()
        .unwrap();

    assert_eq!(post.title, "Weekly Check-in");
    assert_eq!(
        post.content,
        "Let's discuss recent trends, what has everyone been working on this week? Looking forward to your thoughts."
    );
    assert_eq!(post.author.as_deref(), Some("alice"));
    assert_eq!(post.timestamp.as_deref(), Some("2026-07-30 10:00"));
    assert_eq!(post.source_url, "https://forum.example/post/42");

    // Two distinct comments; the duplicate collapses
    assert_eq!(post.comments.len(), 2);
    assert!(post.comments[0].contains("integration tests"));
    assert!(post.comments[1].contains("lock-free queues"));
}

#[test]
fn extraction_is_idempotent_on_one_document() {
    let doc = dom::parse(CHECKIN_PAGE);
    let opts = Options::default();

    let first = detail::extract_detail_from_document(&doc, "/post/42", &opts);
    let second = detail::extract_detail_from_document(&doc, "/post/42", &opts);
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn chrome_only_page_yields_not_found() {
    let html = r#"
    <html><body>
      <nav><a href="/home">Home</a><a href="/explore">Explore</a><a href="/login">Login</a></nav>
      <div class="sidebar">Trending</div>
      <footer>
        <p>AcmeForum is a community based around good friends, great discussions, and a shared love of building things together.</p>
        <p>All rights reserved.</p>
      </footer>
    </body></html>
    "#;

    let result = extract_detail(html, "/post/404").unwrap();
    assert!(result.is_none());
}

#[test]
fn hydrated_page_falls_back_to_wild_text() {
    // Client-side rendered snapshot: no content containers survive
    let html = r#"
    <html><body><div id="app">AcmeForum
Home
Explore
Rust lifetimes in practice
Posted by carol
July 30, 2026
I have been trying to understand how lifetimes interact with trait objects lately.
It took a while, but I think the compiler errors finally started to make sense.
3 points
Reply
</div></body></html>
    "#;

    let post = extract_detail(html, "/post/17").unwrap().unwrap();

    assert_eq!(post.title, "Rust lifetimes in practice");
    assert!(post.content.contains("lifetimes interact with trait objects"));
    assert!(post.content.contains("compiler errors"));
    assert!(!post.content.contains("Reply"));
    assert_eq!(post.author.as_deref(), Some("carol"));
    assert_eq!(post.timestamp.as_deref(), Some("July 30, 2026"));
}

#[test]
fn leaked_hydration_state_is_not_content() {
    let html = r#"
    <html><body>
      <div class="post-content">
        <p>self.__next_f.push([1, "serialized component payload chunk data here"])</p>
        <p>self.__next_f.push([2, "another serialized component payload chunk"])</p>
      </div>
    </body></html>
    "#;

    let result = extract_detail(html, "/post/9").unwrap();
    assert!(result.is_none());
}

#[test]
fn title_falls_back_to_page_title_cleanup() {
    let html = r#"
    <html>
    <head><title>Profiling allocator churn - AcmeForum</title></head>
    <body>
      <div class="post-content">
        <p>We spent the weekend chasing a performance regression in our allocator, and the fix turned out to be a one line change to arena sizing.</p>
      </div>
    </body></html>
    "#;

    let post = extract_detail(html, "/post/3").unwrap().unwrap();
    assert_eq!(post.title, "Profiling allocator churn");
}
