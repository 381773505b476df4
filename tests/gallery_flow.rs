use galleryview::models::{FolderListing, RecursiveListing};
use galleryview::{
    decode_config, encode_config, is_still_image, shuffle_in_place, trim_prefix, DisplayConfig,
    EntryType, QueryParams, ServerUrl, SortKey, UrlBuilder,
};

#[test]
fn shared_link_reproduces_random_listing() {
    let cfg = DisplayConfig {
        sort: SortKey::Random.to_string(),
        reverse: false,
        raw: false,
        recursive: true,
        rand_seed: 42,
    };

    let mut ui_params = QueryParams::with_dir("/trips/2023");
    ui_params.set("cfg", encode_config(&cfg));
    let link = UrlBuilder::default().ui_url(&ui_params);
    assert_eq!(link, "?dir=%2Ftrips%2F2023&cfg=random-0-0-1-42");

    // the receiving page decodes the config and orders the same way
    let received = decode_config(ui_params.get("cfg").unwrap());
    assert_eq!(received, cfg);
    assert!(received.is_random());

    let names = ["a.jpg", "b.jpg", "c.mp4", "d.png", "e.mov"];
    let mut sender = names.to_vec();
    let mut receiver = names.to_vec();
    shuffle_in_place(&mut sender, cfg.rand_seed);
    shuffle_in_place(&mut receiver, received.rand_seed);
    assert_eq!(sender, receiver);
}

#[test]
fn api_urls_for_each_preset() {
    let params = QueryParams::with_dir("");
    let cases = [
        (ServerUrl::Local, "http://127.0.0.1:8080/api/folder?dir=%2F"),
        (ServerUrl::Relative, "api/folder?dir=%2F"),
        (ServerUrl::Root, "/api/folder?dir=%2F"),
    ];
    for (server_url, expected) in cases {
        assert_eq!(UrlBuilder::from(server_url).api_url("folder", &params), expected);
    }
}

#[test]
fn folder_listing_from_backend_json() {
    let body = r#"{
        "media": [{"name": "cat.JPG"}, {"name": "dog.mp4"}],
        "folders": [{"name": "2023", "media": "cover.jpg"}, {"name": "empty", "media": null}],
        "page": 0,
        "page_size": 50,
        "total": 2
    }"#;
    let listing: FolderListing = serde_json::from_str(body).unwrap();
    assert_eq!(listing.folders.len(), 2);
    assert_eq!(listing.folders[1].media, None);
    assert!(listing.is_last_page());

    let stills: Vec<&str> = listing
        .media
        .iter()
        .map(|m| m.name.as_str())
        .filter(|name| is_still_image(name))
        .collect();
    assert_eq!(stills, ["cat.JPG"]);
}

#[test]
fn later_pages_omit_folders() {
    let body = r#"{"media": [], "page": 3, "page_size": 50, "total": 120}"#;
    let listing: FolderListing = serde_json::from_str(body).unwrap();
    assert!(listing.folders.is_empty());
    assert_eq!(listing.total_pages(), 3);
}

#[test]
fn recursive_listing_paths() {
    let body = r#"{
        "media": [{"dir": "/trips/2023", "name": "beach.jpg"}],
        "page": 0,
        "page_size": 50,
        "total": 1
    }"#;
    let listing: RecursiveListing = serde_json::from_str(body).unwrap();
    let item = &listing.media[0];
    assert_eq!(trim_prefix(&item.dir, "/trips"), "/2023");
}

#[test]
fn entry_tags_match_listing_api() {
    let tags: Vec<EntryType> = serde_json::from_str("[1, 0, 0]").unwrap();
    assert_eq!(tags, [EntryType::Folder, EntryType::Image, EntryType::Image]);
    assert_eq!(serde_json::to_string(&tags).unwrap(), "[1,0,0]");
}
