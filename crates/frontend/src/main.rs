mod browser;
mod components;
mod pages;

use champions_shared::region::Region;
use dioxus::prelude::*;

use pages::dashboard::Dashboard;
use pages::get_started::GetStarted;
use pages::home::Home;
use pages::not_found::NotFound;
use pages::profile::Profile;
use pages::resources::Resources;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/get-started")]
    GetStarted {},
    #[route("/leaderboard")]
    Leaderboard {},
    #[route("/america-leaderboard")]
    AmericaLeaderboard {},
    #[route("/emea-leaderboard")]
    EmeaLeaderboard {},
    #[route("/greater-china-leaderboard")]
    GreaterChinaLeaderboard {},
    #[route("/profile/:name")]
    Profile { name: String },
    #[route("/resources")]
    Resources {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Typed route of a region's leaderboard page.
pub fn leaderboard_route(region: Region) -> Route {
    match region {
        Region::Apac => Route::Leaderboard {},
        Region::America => Route::AmericaLeaderboard {},
        Region::Emea => Route::EmeaLeaderboard {},
        Region::GreaterChina => Route::GreaterChinaLeaderboard {},
    }
}

#[component]
fn Leaderboard() -> Element {
    rsx! {
        pages::leaderboard::RegionLeaderboard { region: Region::Apac }
    }
}

#[component]
fn AmericaLeaderboard() -> Element {
    rsx! {
        pages::leaderboard::RegionLeaderboard { region: Region::America }
    }
}

#[component]
fn EmeaLeaderboard() -> Element {
    rsx! {
        pages::leaderboard::RegionLeaderboard { region: Region::Emea }
    }
}

#[component]
fn GreaterChinaLeaderboard() -> Element {
    rsx! {
        pages::leaderboard::RegionLeaderboard { region: Region::GreaterChina }
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        document::Title { "TetraPak Champions" }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
