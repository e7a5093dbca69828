use crate::{input::CollectionPolicy, render::RenderSettings};

#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub inner_size: [f32; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub main_window: WindowSettings,
    pub render: RenderSettings,
    pub collection: CollectionPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            main_window: WindowSettings {
                title: "Points and Vectors Plotter".to_owned(),
                inner_size: [320.0, 120.0],
            },
            render: RenderSettings::default(),
            collection: CollectionPolicy::StopAtFirstInvalid,
        }
    }
}
