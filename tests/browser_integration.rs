use floor_tally::config::PageMarkers;
use floor_tally::listing::{LeadingRows, Unit, summarize};
use floor_tally::{BrowserSession, LaunchOptions, ListingError, page};

const LISTING_HTML: &str = r#"
<html><body>
  <input type="checkbox" id="chkMeasurements">
  <div id="propertyDetailsRoomsSection">
    <div class="propertyDetailsRoomContent">
      <div>
        <span class="listingDetailsRoomDetails_Floor">Main level</span>
        <span class="listingDetailsRoomDetails_Room">Living room</span>
        <span class="Imperial">13 ft ,6 in x 11 ft</span>
        <span class="Metric">4.11 m x 3.35 m</span>
      </div>
      <div>
        <span class="listingDetailsRoomDetails_Floor"></span>
        <span class="listingDetailsRoomDetails_Room">Kitchen</span>
        <span class="Imperial">10 ft x 9 ft</span>
        <span class="Metric">3.05 m x 2.74 m</span>
      </div>
      <div>
        <span class="listingDetailsRoomDetails_Floor">Second level</span>
        <span class="listingDetailsRoomDetails_Room">Bedroom</span>
        <span class="Imperial">12 ft x 12 ft</span>
        <span class="Metric">3.66 m x 3.66 m</span>
      </div>
    </div>
  </div>
</body></html>
"#;

fn open(html: &str) -> BrowserSession {
    let session = BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser");
    session
        .navigate(&format!("data:text/html,{}", urlencoding::encode(html)))
        .expect("Failed to navigate");
    session.wait_for_navigation().expect("Navigation did not finish");
    session
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_read_rows_from_page() {
    let session = open(LISTING_HTML);
    let tab = session.tab().expect("No active tab");
    let markers = PageMarkers::default();

    let unit = page::read_unit(&*tab, &markers).expect("Failed to read unit");
    assert_eq!(unit, Unit::Imperial);

    let rows = page::read_rows(&*tab, &markers).expect("Failed to read rows");
    assert_eq!(rows.len(), 3);

    let listing = summarize(&rows, unit, LeadingRows::Reject).expect("Failed to summarize");
    let floors: Vec<(&str, f64)> = listing.buckets().iter().map(|b| (b.label(), b.area())).collect();
    assert_eq!(floors, vec![("Main level", 233.0), ("Second level", 144.0)]);
    assert_eq!(listing.total_area(), 377.0);
}

#[test]
#[ignore]
fn test_checked_toggle_reads_metric() {
    let html = LISTING_HTML.replace(r#"id="chkMeasurements">"#, r#"id="chkMeasurements" checked>"#);
    let session = open(&html);
    let tab = session.tab().expect("No active tab");

    let unit = page::read_unit(&*tab, &PageMarkers::default()).expect("Failed to read unit");
    assert_eq!(unit, Unit::Metric);
}

#[test]
#[ignore]
fn test_missing_rooms_section() {
    let session = open("<html><body><p>Sold</p></body></html>");
    let tab = session.tab().expect("No active tab");

    let err = page::read_rows(&*tab, &PageMarkers::default()).unwrap_err();
    assert!(matches!(err, ListingError::RoomsSectionMissing));
}

#[test]
#[ignore]
fn test_data_url_fails_site_gate() {
    let session = open(LISTING_HTML);

    let err = session.extract_listing().unwrap_err();
    assert!(matches!(err, ListingError::WrongSite { .. }));
}
