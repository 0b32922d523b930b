#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{
    fs,
    path::Path,
    time::{Duration, Instant},
};
use unit_converter_toolbox::{
    category::{self, UnitCategory},
    config, conversion,
};

fn main() -> Result<(), eframe::Error> {
    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_default();
    eframe::run_native(
        "Unit Converter Toolbox",
        native,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg.clone()))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn unit_combo(ui: &mut egui::Ui, value: &mut String, options: &[&str]) {
    egui::ComboBox::from_id_source(ui.next_auto_id())
        .selected_text(value.clone())
        .show_ui(ui, |ui| {
            for name in options {
                ui.selectable_value(value, name.to_string(), *name);
            }
        });
}

/// 범주 전환 시 미리 선택되는 입력/출력 단위 쌍.
fn default_units_for_category(category: UnitCategory) -> (&'static str, &'static str) {
    match category {
        UnitCategory::Length => ("kilometers", "meters"),
        UnitCategory::Weight => ("grams", "kilograms"),
        UnitCategory::Temperature => ("celsius", "fahrenheit"),
        UnitCategory::Time => ("minutes", "seconds"),
        UnitCategory::Area => ("acres", "square meters"),
        UnitCategory::Volume => ("gallons", "liters"),
    }
}

struct GuiApp {
    config: config::Config,
    // 변환 카드
    category: UnitCategory,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // 설정
    theme: config::Theme,
    temperature_fallback: conversion::TemperatureFallback,
    window_alpha: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    save_status: Option<String>,
    // 세션 1회 환영 배너. 설정으로 저장하지 않는다.
    welcome_until: Option<Instant>,
    apply_initial_view_size: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let (conv_from, conv_to) = default_units_for_category(config.default_category);
        Self {
            category: config.default_category,
            conv_value: 1.0,
            conv_from: conv_from.into(),
            conv_to: conv_to.into(),
            conv_result: None,
            theme: config.theme,
            temperature_fallback: config.temperature_fallback,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            always_on_top: config.always_on_top,
            show_settings_modal: false,
            show_help_modal: false,
            save_status: None,
            welcome_until: Some(Instant::now() + Duration::from_secs(2)),
            apply_initial_view_size: true,
            config,
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Categories");
            ui.add_space(8.0);
        });
        for cat in category::ALL {
            let selected = self.category == cat;
            let button = egui::Button::new(cat.label())
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui.add(button).on_hover_text("Switch category");
            if resp.clicked() && !selected {
                self.category = cat;
                let (f, t) = default_units_for_category(cat);
                self.conv_from = f.to_string();
                self.conv_to = t.to_string();
                self.conv_result = None;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_convert(&mut self, ui: &mut egui::Ui) {
        ui.heading(format!("{} Converter", self.category.label()));
        label_with_tip(
            ui,
            "Convert between various units with style!",
            "Enter a value, pick units, then run the conversion.",
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                let units = conversion::unit_options(self.category);
                egui::Grid::new("conv_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(ui, "Value", "Enter the value to convert");
                        ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                        ui.end_row();

                        label_with_tip(ui, "From", "Current unit of the value");
                        unit_combo(ui, &mut self.conv_from, units);
                        ui.end_row();

                        label_with_tip(ui, "To", "Desired unit after conversion");
                        unit_combo(ui, &mut self.conv_to, units);
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button("Convert").clicked() {
                    self.conv_result = match conversion::convert_with(
                        self.category,
                        self.conv_value,
                        self.conv_from.trim(),
                        self.conv_to.trim(),
                        self.temperature_fallback,
                    ) {
                        Ok(v) => Some(format!("Converted value: {v:.2} {}", self.conv_to.trim())),
                        Err(e) => Some(format!("Error: {e}")),
                    };
                }
                if let Some(res) = &self.conv_result {
                    ui.label(res);
                }
            });
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(560.0, 420.0)));
            self.apply_initial_view_size = false;
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 테마와 투명도 적용 + 라벨 복사 방지 스타일
        let mut visuals = match self.theme {
            config::Theme::Light => egui::Visuals::light(),
            config::Theme::Dark => egui::Visuals::dark(),
            config::Theme::System => {
                if ctx.style().visuals.dark_mode {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                }
            }
        };
        visuals.window_fill = visuals.window_fill.linear_multiply(self.window_alpha);
        visuals.panel_fill = visuals.panel_fill.linear_multiply(self.window_alpha);
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals = visuals;
        ctx.set_style(style);

        // 세션 1회 환영 배너
        if let Some(deadline) = self.welcome_until {
            if Instant::now() < deadline {
                egui::Window::new("welcome")
                    .title_bar(false)
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                    .show(ctx, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.heading("Unit Converter Toolbox");
                            ui.label("Loading the converter...");
                        });
                    });
                ctx.request_repaint_after(Duration::from_millis(100));
            } else {
                self.welcome_until = None;
            }
        }

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Unit Converter Toolbox");
                ui.separator();
                if ui.button("Settings").clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button("Help / About").clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new("Program Settings")
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading("General");
                    ui.separator();
                    ui.label("Theme");
                    ui.horizontal(|ui| {
                        for (label, theme) in [
                            ("System", config::Theme::System),
                            ("Light", config::Theme::Light),
                            ("Dark", config::Theme::Dark),
                        ] {
                            ui.selectable_value(&mut self.theme, theme, label);
                        }
                    });
                    ui.separator();
                    ui.label("Startup category");
                    egui::ComboBox::from_id_source("default_category")
                        .selected_text(self.config.default_category.label())
                        .show_ui(ui, |ui| {
                            for cat in category::ALL {
                                ui.selectable_value(
                                    &mut self.config.default_category,
                                    cat,
                                    cat.label(),
                                );
                            }
                        });
                    ui.separator();
                    ui.label("Temperature pairs without a rule");
                    ui.horizontal(|ui| {
                        ui.selectable_value(
                            &mut self.temperature_fallback,
                            conversion::TemperatureFallback::Legacy,
                            "Legacy (pass value through)",
                        );
                        ui.selectable_value(
                            &mut self.temperature_fallback,
                            conversion::TemperatureFallback::Strict,
                            "Strict (report error)",
                        );
                    });
                    ui.separator();
                    ui.checkbox(&mut self.always_on_top, "Always on top");
                    ui.separator();
                    ui.label("Window transparency");
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    if ui.button("Save settings").clicked() {
                        self.config.theme = self.theme;
                        self.config.temperature_fallback = self.temperature_fallback;
                        self.config.window_alpha = self.window_alpha;
                        self.config.always_on_top = self.always_on_top;
                        if let Err(e) = self.config.save() {
                            self.save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.save_status = Some("Saved.".into());
                        }
                    }
                    if let Some(msg) = &self.save_status {
                        ui.label(msg);
                    }
                });
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new("Help / About")
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading("Offline converter for length/weight/temperature/time/area/volume");
                    ui.label("Version: 0.1.0");
                    ui.separator();
                    ui.label("Unit guide");
                    ui.label("- Results are shown to two decimal places.");
                    ui.label("- Temperature pairs without a conversion rule return the input value; switch to Strict mode in settings to get an error instead.");
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(120.0)
            .default_width(150.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_convert(ui);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_follows_config_defaults() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.category, UnitCategory::Length);
        assert_eq!(app.conv_from, "kilometers");
        assert_eq!(app.conv_to, "meters");
        assert_eq!(
            app.temperature_fallback,
            conversion::TemperatureFallback::Legacy
        );
    }

    #[test]
    fn default_unit_pairs_are_valid_names() {
        for cat in category::ALL {
            let (from, to) = default_units_for_category(cat);
            assert!(conversion::convert(cat, 1.0, from, to).is_ok(), "{from} -> {to}");
        }
    }

    #[test]
    fn convert_card_path_km_to_m() {
        let out = conversion::convert(UnitCategory::Length, 1.0, "kilometers", "meters").unwrap();
        assert_eq!(out, 1000.0);
    }
}
