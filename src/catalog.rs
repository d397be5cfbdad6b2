//! Static site content: the album, shows, merch and contact links.

use std::path::{Path, PathBuf};

pub const ARTIST: &str = "Liim Lasalle";
pub const ALBUM_TITLE: &str = "Liim Lasalle Loves You";
pub const ALBUM_DIR: &str = "music/Liim Lasalle Loves You";
pub const ALBUM_COVER: &str = "Liim Lasalle Loves You 2.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub file: &'static str,
}

impl Track {
    /// Location of the audio file under the assets root.
    pub fn path(&self, assets: &Path) -> PathBuf {
        assets.join(ALBUM_DIR).join(self.file)
    }
}

pub const TRACKS: &[Track] = &[
    Track { title: "Radio Advice", file: "Radio Advice.wav" },
    Track { title: "For The Both Of Us", file: "For The Both Of Us.wav" },
    Track { title: "Clutching My Breaks", file: "Clutching My Breaks.wav" },
    Track { title: "Mezcal", file: "Mezcal.wav" },
    Track { title: "Why Why", file: "Why Why.wav" },
    Track { title: "Hope", file: "Hope.wav" },
    Track { title: "Two Summers", file: "Two Summers.wav" },
    Track { title: "Shams Love Song", file: "Shams Love Song.wav" },
    Track { title: "Sahara Freestyle", file: "Sahara Freestyle.wav" },
    Track { title: "Rollin Around", file: "Rollin Around.wav" },
    Track { title: "Break", file: "Break.wav" },
    Track { title: "Le Pouvoir Noir (ft. N8SHO)", file: "Le Pouvoir Noir (ft. N8SHO).wav" },
    Track { title: "Playin Yoself", file: "Playin Yoself.wav" },
    Track { title: "Doin Thangs", file: "Doin Thangs.wav" },
    Track { title: "Important To Ya", file: "Important To Ya.wav" },
    Track { title: "Kicked Rocks", file: "Kicked Rocks.wav" },
    Track { title: "Liim Lasalle Loves You", file: "Liim Lasalle Loves You.wav" },
];

pub const ABOUT: &[&str] = &[
    "Liim Lasalle is a rapper and producer",
    "from New York City.",
    "",
    "His debut album \"Liim Lasalle Loves You\"",
    "is a love letter to the city, to family",
    "and to the people who stayed.",
    "",
    "Billboard Hip-Hop Rookie of the Month,",
    "November 2025.",
];

#[derive(Debug, Clone, Copy)]
pub struct Show {
    pub date: &'static str,
    pub venue: &'static str,
    pub city: &'static str,
    pub tickets: &'static str,
}

pub const SHOWS: &[Show] = &[Show {
    date: "TBA",
    venue: "Bowery Ballroom",
    city: "New York, NY",
    tickets: "https://liim.nyc/shows",
}];

#[derive(Debug, Clone, Copy)]
pub struct MerchItem {
    pub name: &'static str,
    pub price: &'static str,
    pub url: &'static str,
}

pub const MERCH: &[MerchItem] = &[
    MerchItem { name: "Loves You Tee", price: "$35", url: "https://liim.nyc/merch/loves-you-tee" },
    MerchItem { name: "Loves You Hoodie", price: "$70", url: "https://liim.nyc/merch/loves-you-hoodie" },
    MerchItem { name: "Loves You Vinyl", price: "$30", url: "https://liim.nyc/merch/vinyl" },
    MerchItem { name: "Radio Advice Cap", price: "$28", url: "https://liim.nyc/merch/cap" },
];

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIALS: &[Link] = &[
    Link { label: "Instagram", url: "https://www.instagram.com/liimlasalle" },
    Link { label: "TikTok", url: "https://www.tiktok.com/@liimlasalle" },
    Link { label: "X", url: "https://x.com/liimlasalle" },
    Link { label: "YouTube", url: "https://www.youtube.com/@liimlasalle" },
];

pub const STREAMING: &[Link] = &[
    Link { label: "Spotify", url: "https://open.spotify.com/artist/liimlasalle" },
    Link { label: "Apple Music", url: "https://music.apple.com/artist/liim-lasalle" },
    Link { label: "Tidal", url: "https://tidal.com/artist/liimlasalle" },
];

pub const CONTACT_EMAIL: &str = "mgmt@liim.nyc";
