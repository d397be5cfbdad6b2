use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::*;
use crate::{
    remote::{ChannelLists, Video},
    shell::{Effect, Key, Library, ShellInput, Timer},
    wheel::{Point, WheelGeometry},
};

fn setup() -> (IpodShell, Library) {
    let mut ipod = IpodShell::new(AudioConfig::default());
    ipod.set_viewport(Rect::new(0, 0, 160, 48));
    (ipod, Library::default())
}

fn press(ipod: &mut IpodShell, library: &mut Library, key: Key) -> Vec<Effect> {
    ipod.handle(ShellInput::Key(key), Instant::now(), library)
}

fn on_ring(wheel: &WheelGeometry, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        wheel.center.x + wheel.radius * 0.7 * radians.cos(),
        wheel.center.y + wheel.radius * 0.7 * radians.sin(),
    )
}

fn open_album(ipod: &mut IpodShell, library: &mut Library) {
    press(ipod, library, Key::Enter);
    press(ipod, library, Key::Enter);
    assert_eq!(ipod.nav().current(), screens::ALBUM);
}

#[test]
fn back_restores_screen_and_selection() {
    let (mut ipod, mut library) = setup();
    press(&mut ipod, &mut library, Key::Down);
    press(&mut ipod, &mut library, Key::Down);
    press(&mut ipod, &mut library, Key::Enter);
    assert_eq!(ipod.nav().current(), screens::NEWS);
    assert_eq!(ipod.title(&library), "News");

    press(&mut ipod, &mut library, Key::Escape);
    assert_eq!(ipod.nav().current(), screens::MAIN);
    assert_eq!(ipod.nav().selected(), 2);
    assert_eq!(ipod.title(&library), "Liim's iPod");

    assert!(press(&mut ipod, &mut library, Key::Backspace).is_empty());
    assert_eq!(ipod.nav().current(), screens::MAIN);
}

#[test]
fn entering_videos_fetches_channel_once() {
    let (mut ipod, mut library) = setup();
    press(&mut ipod, &mut library, Key::Down);
    let effects = press(&mut ipod, &mut library, Key::Enter);
    assert_eq!(
        effects,
        vec![
            Effect::Schedule {
                timer: Timer::ExitTransition(1),
                after: EXIT_TRANSITION
            },
            Effect::FetchChannel
        ]
    );

    press(&mut ipod, &mut library, Key::Escape);
    let effects = press(&mut ipod, &mut library, Key::Enter);
    assert!(!effects.contains(&Effect::FetchChannel));
}

#[test]
fn stale_exit_timer_is_ignored() {
    let (mut ipod, mut library) = setup();
    press(&mut ipod, &mut library, Key::Enter);
    press(&mut ipod, &mut library, Key::Enter);
    assert_eq!(ipod.nav().exiting(), Some(screens::MUSIC));

    ipod.handle(ShellInput::Timer(Timer::ExitTransition(1)), Instant::now(), &mut library);
    assert_eq!(ipod.nav().exiting(), Some(screens::MUSIC));

    ipod.handle(ShellInput::Timer(Timer::ExitTransition(2)), Instant::now(), &mut library);
    assert_eq!(ipod.nav().exiting(), None);
}

#[test]
fn selecting_a_track_plays_and_opens_player() {
    let (mut ipod, mut library) = setup();
    open_album(&mut ipod, &mut library);
    press(&mut ipod, &mut library, Key::Down);
    press(&mut ipod, &mut library, Key::Down);

    let effects = press(&mut ipod, &mut library, Key::Enter);
    assert!(matches!(effects[0], Effect::Audio(AudioCommand::PlayTrack { index: 2, .. })));
    assert_eq!(ipod.nav().current(), PLAYER);
    assert_eq!(ipod.indicator(), "▶");
    assert_eq!(ipod.track_number().as_deref(), Some("3 of 17"));

    press(&mut ipod, &mut library, Key::Space);
    assert_eq!(ipod.indicator(), "❚❚");

    // Leaving the player keeps the track loaded.
    press(&mut ipod, &mut library, Key::Escape);
    assert_eq!(ipod.media().state(), PlaybackState::Paused(2));
}

#[test]
fn volume_display_follows_latest_step() {
    let (mut ipod, mut library) = setup();
    open_album(&mut ipod, &mut library);
    press(&mut ipod, &mut library, Key::Enter);

    let effects = press(&mut ipod, &mut library, Key::Up);
    assert!(matches!(effects[0], Effect::Audio(AudioCommand::SetVolume(_))));
    assert_eq!(
        effects[1],
        Effect::Schedule {
            timer: Timer::VolumeDisplay(1),
            after: Duration::from_millis(1500)
        }
    );
    press(&mut ipod, &mut library, Key::Up);

    let view = ipod.progress_view(30_000, 200_000);
    assert!(view.volume_mode);
    assert_eq!((view.left.as_str(), view.right.as_str()), ("Volume", "60%"));

    ipod.handle(ShellInput::Timer(Timer::VolumeDisplay(1)), Instant::now(), &mut library);
    assert!(ipod.progress_view(30_000, 200_000).volume_mode);

    ipod.handle(ShellInput::Timer(Timer::VolumeDisplay(2)), Instant::now(), &mut library);
    let view = ipod.progress_view(30_000, 200_000);
    assert!(!view.volume_mode);
    assert_eq!((view.left.as_str(), view.right.as_str()), ("0:30", "-2:50"));
    assert!((view.ratio - 0.15).abs() < 1e-9);
}

#[test]
fn clockwise_rotation_moves_selection_down() {
    let (mut ipod, mut library) = setup();
    let wheel = ipod.layout().wheel_geometry();
    let now = Instant::now();

    ipod.handle(ShellInput::PointerDown(on_ring(&wheel, 0.0)), now, &mut library);
    assert!(ipod.wheel_active());
    ipod.handle(ShellInput::PointerMove(on_ring(&wheel, 10.0)), now, &mut library);
    assert_eq!(ipod.nav().selected(), 0);
    ipod.handle(ShellInput::PointerMove(on_ring(&wheel, 20.0)), now, &mut library);
    assert_eq!(ipod.nav().selected(), 1);
    ipod.handle(ShellInput::PointerMove(on_ring(&wheel, 355.0)), now, &mut library);
    assert_eq!(ipod.nav().selected(), 0);

    let effects = ipod.handle(ShellInput::PointerUp(on_ring(&wheel, 355.0)), now, &mut library);
    assert!(effects.is_empty());
    assert!(!ipod.wheel_active());
}

#[test]
fn taps_map_to_zones() {
    let (mut ipod, mut library) = setup();
    let wheel = ipod.layout().wheel_geometry();
    let now = Instant::now();
    let later = now + Duration::from_millis(50);

    // Center button selects.
    ipod.handle(ShellInput::PointerDown(wheel.center), now, &mut library);
    ipod.handle(ShellInput::PointerUp(wheel.center), later, &mut library);
    assert_eq!(ipod.nav().current(), screens::MUSIC);

    // Top of the wheel is MENU.
    let top = on_ring(&wheel, 270.0);
    ipod.handle(ShellInput::PointerDown(top), now, &mut library);
    ipod.handle(ShellInput::PointerUp(top), later, &mut library);
    assert_eq!(ipod.nav().current(), screens::MAIN);

    // Bottom is play/pause, starting the first track.
    let bottom = on_ring(&wheel, 90.0);
    ipod.handle(ShellInput::PointerDown(bottom), now, &mut library);
    let effects = ipod.handle(ShellInput::PointerUp(bottom), later, &mut library);
    assert!(matches!(effects[..], [Effect::Audio(AudioCommand::PlayTrack { index: 0, .. })]));

    // Right is next.
    let right = on_ring(&wheel, 0.0);
    ipod.handle(ShellInput::PointerDown(right), now, &mut library);
    ipod.handle(ShellInput::PointerUp(right), later, &mut library);
    assert_eq!(ipod.media().state(), PlaybackState::Playing(1));

    // A slow press is not a tap.
    ipod.handle(ShellInput::PointerDown(right), now, &mut library);
    ipod.handle(ShellInput::PointerUp(right), now + Duration::from_millis(400), &mut library);
    assert_eq!(ipod.media().state(), PlaybackState::Playing(1));
}

#[test]
fn clicking_a_row_activates_after_delay() {
    let (mut ipod, mut library) = setup();
    let list = ipod.layout().list;
    let point = Point::from_cell(list.x + 2, list.y + 5);

    let effects = ipod.handle(ShellInput::PointerDown(point), Instant::now(), &mut library);
    assert_eq!(
        effects,
        vec![Effect::Schedule {
            timer: Timer::ActivateSelection(1),
            after: CLICK_ACTIVATION_DELAY
        }]
    );
    assert_eq!(ipod.nav().selected(), 5);
    assert_eq!(ipod.nav().current(), screens::MAIN);

    ipod.handle(ShellInput::Timer(Timer::ActivateSelection(1)), Instant::now(), &mut library);
    assert_eq!(ipod.nav().current(), screens::ABOUT);
}

#[test]
fn scroll_needs_wide_viewport() {
    let (mut ipod, mut library) = setup();
    let center = ipod.layout().wheel_geometry().center;
    ipod.handle(ShellInput::Scroll { at: center, delta: 33.0 }, Instant::now(), &mut library);
    assert_eq!(ipod.nav().selected(), 1);

    ipod.set_viewport(Rect::new(0, 0, 100, 40));
    let center = ipod.layout().wheel_geometry().center;
    ipod.handle(ShellInput::Scroll { at: center, delta: 33.0 }, Instant::now(), &mut library);
    assert_eq!(ipod.nav().selected(), 1);
}

#[test]
fn youtube_video_opens_player_and_pauses_audio() {
    let (mut ipod, mut library) = setup();
    library.remote.begin_channel();
    library.remote.finish_channel(Ok(ChannelLists {
        playlists: vec![],
        videos: vec![Video {
            id: "dQw4w9WgXcQ".into(),
            title: "Radio Advice (Visualizer)".into(),
            published_at: None,
            thumbnail: None,
        }],
    }));

    // Start a track from the wheel so there is something to pause.
    let wheel = ipod.layout().wheel_geometry();
    let bottom = on_ring(&wheel, 90.0);
    let now = Instant::now();
    ipod.handle(ShellInput::PointerDown(bottom), now, &mut library);
    ipod.handle(ShellInput::PointerUp(bottom), now, &mut library);
    assert!(ipod.media().state().is_playing());

    let effects = ipod.navigate_to(VIDEOS, &mut library);
    assert!(!effects.contains(&Effect::FetchChannel));

    let effects = press(&mut ipod, &mut library, Key::Enter);
    assert_eq!(effects[0], Effect::Audio(AudioCommand::Pause));
    assert!(
        effects
            .iter()
            .any(|e| matches!(e, Effect::OpenExternal(url) if url.contains("embed/dQw4w9WgXcQ")))
    );
    assert_eq!(ipod.nav().current(), VIDEO_PLAYER);
    assert_eq!(ipod.media().state(), PlaybackState::Paused(0));
    assert!(ipod.media().video().is_playing());

    press(&mut ipod, &mut library, Key::Enter);
    assert!(!ipod.media().video().is_playing());

    press(&mut ipod, &mut library, Key::Escape);
    assert_eq!(ipod.nav().current(), VIDEOS);
    assert_eq!(ipod.media().video().embed_url(), None);
}

#[test]
fn playlist_screen_loads_lazily() {
    let (mut ipod, mut library) = setup();
    library.remote.begin_channel();
    library.remote.finish_channel(Ok(ChannelLists {
        playlists: vec![crate::remote::Playlist {
            id: "PL1".into(),
            title: "Live".into(),
            published_at: None,
            thumbnail: None,
        }],
        videos: vec![],
    }));

    let effects = ipod.navigate_to("playlist:PL1", &mut library);
    assert!(effects.contains(&Effect::FetchPlaylist("PL1".into())));
    assert_eq!(ipod.title(&library), "Live");
    assert_eq!(ipod.body(&library).items()[0].label, screens::LOADING);

    library.remote.finish_playlist("PL1", Err("boom".into()));
    assert_eq!(ipod.body(&library).items()[0].label, screens::LOAD_FAILED);

    ipod.go_back();
    let effects = ipod.navigate_to("playlist:PL1", &mut library);
    assert!(effects.contains(&Effect::FetchPlaylist("PL1".into())));

    assert!(ipod.navigate_to("playlist:PL2", &mut library).is_empty());
}

#[test]
fn links_open_externally() {
    let (mut ipod, mut library) = setup();
    ipod.navigate_to(screens::CONTACT, &mut library);
    let effects = press(&mut ipod, &mut library, Key::Enter);
    assert_eq!(effects, vec![Effect::OpenExternal("mailto:mgmt@liim.nyc".into())]);
}

#[test]
fn track_end_advances() {
    let (mut ipod, mut library) = setup();
    open_album(&mut ipod, &mut library);
    press(&mut ipod, &mut library, Key::Enter);

    let effects = ipod.handle(ShellInput::TrackEnded, Instant::now(), &mut library);
    assert!(matches!(effects[..], [Effect::Audio(AudioCommand::PlayTrack { index: 1, .. })]));

    ipod.handle(ShellInput::PlaybackFailed(1), Instant::now(), &mut library);
    assert_eq!(ipod.media().state(), PlaybackState::Paused(1));
}

#[test]
fn play_after_album_end_restarts_last_track() {
    let (mut ipod, mut library) = setup();
    open_album(&mut ipod, &mut library);
    let last = TRACKS.len() - 1;
    for _ in 0..last {
        press(&mut ipod, &mut library, Key::Down);
    }
    press(&mut ipod, &mut library, Key::Enter);
    assert_eq!(ipod.nav().current(), PLAYER);

    assert!(ipod.handle(ShellInput::TrackEnded, Instant::now(), &mut library).is_empty());
    assert_eq!(ipod.indicator(), "❚❚");

    let effects = press(&mut ipod, &mut library, Key::Enter);
    assert!(matches!(
        effects[..],
        [Effect::Audio(AudioCommand::PlayTrack { index, .. })] if index == last
    ));
    assert_eq!(ipod.indicator(), "▶");
}

#[test]
fn text_screens_scroll_content() {
    let (mut ipod, mut library) = setup();
    ipod.set_viewport(Rect::new(0, 0, 60, 20));
    ipod.navigate_to(screens::ABOUT, &mut library);

    press(&mut ipod, &mut library, Key::Down);
    press(&mut ipod, &mut library, Key::Down);
    let rows = ipod.layout().list_rows();
    let lines = crate::catalog::ABOUT.len();
    assert_eq!(ipod.content_offset(), 2.min(lines.saturating_sub(rows)));

    press(&mut ipod, &mut library, Key::Up);
    press(&mut ipod, &mut library, Key::Up);
    press(&mut ipod, &mut library, Key::Up);
    assert_eq!(ipod.content_offset(), 0);
}
