use ratatui::style::Color;

// iPod Classic
pub const IPOD_BODY: Color = Color::from_u32(0x00e8e8e8);
pub const IPOD_SCREEN: Color = Color::from_u32(0x00f5f0e6);
pub const IPOD_TEXT: Color = Color::from_u32(0x001a1a1a);
pub const IPOD_HEADER: Color = Color::from_u32(0x00c9d1da);
pub const IPOD_SELECTION: Color = Color::from_u32(0x003875d7);
pub const IPOD_SELECTION_TEXT: Color = Color::from_u32(0x00ffffff);
pub const IPOD_WHEEL: Color = Color::from_u32(0x00ffffff);
pub const IPOD_WHEEL_LABEL: Color = Color::from_u32(0x009a9a9a);
pub const IPOD_BUTTON: Color = Color::from_u32(0x00d4d4d4);
pub const IPOD_PROGRESS: Color = Color::from_u32(0x003875d7);
pub const IPOD_TRACK: Color = Color::from_u32(0x00b8c4d0);

// Windows 98
pub const WIN_DESKTOP: Color = Color::from_u32(0x00008080);
pub const WIN_FACE: Color = Color::from_u32(0x00c0c0c0);
pub const WIN_SHADOW: Color = Color::from_u32(0x00808080);
pub const WIN_TEXT: Color = Color::from_u32(0x00000000);
pub const WIN_TITLE: Color = Color::from_u32(0x00000080);
pub const WIN_TITLE_INACTIVE: Color = Color::from_u32(0x00808080);
pub const WIN_TITLE_TEXT: Color = Color::from_u32(0x00ffffff);
pub const WIN_WINDOW: Color = Color::from_u32(0x00ffffff);
pub const WIN_LINK: Color = Color::from_u32(0x000000ee);
pub const WIN_SELECTION: Color = Color::from_u32(0x00000080);

// Brand
pub const BRAND: Color = Color::from_u32(0x002d4a3e);
pub const BRAND_LIGHT: Color = Color::from_u32(0x00f5f0e6);
