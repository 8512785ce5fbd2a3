use crate::client::TranslationClient;
use crate::clipboard::ClipboardCopier;
use crate::config::{Config, FileStore};
use crate::controller::Controller;
use crate::dispatch::TokioDispatcher;
use crate::language::Language;
use crate::view::{CopyIcon, ResultCard, TextDirection, View};
use eframe::egui;
use egui_phosphor::regular as icons;
use std::fs;
use std::time::Instant;

const TITLE: &str = "emotrans";

/// Widget interactions collected while painting, applied once the frame is laid out.
#[derive(Debug)]
enum UiEvent {
    Input(String),
    Language(Language),
    Generate,
    ToggleTheme,
    Copy(usize),
}

struct TranslatorApp {
    controller: Controller<TokioDispatcher, FileStore>,
}

impl TranslatorApp {
    fn apply(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::Input(text) => self.controller.on_input_change(text),
            UiEvent::Language(lang) => self.controller.on_language_change(lang),
            UiEvent::Generate => {
                self.controller.on_generate_click();
            }
            UiEvent::ToggleTheme => self.controller.on_theme_toggle(),
            UiEvent::Copy(index) => {
                self.controller.on_copy_click(index, now);
            }
        }
    }
}

impl eframe::App for TranslatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.pump();
        self.controller.tick(now);

        let view = self.controller.view().clone();
        let state = self.controller.state();
        let mut input = state.input_text.clone();
        let mut language = state.target_language;
        let mut events = Vec::new();

        ctx.set_visuals(if view.dark { egui::Visuals::dark() } else { egui::Visuals::light() });

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Emotion-aware translation");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if view.dark { icons::SUN } else { icons::MOON };
                    if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                        events.push(UiEvent::ToggleTheme);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let edit = ui.add(
                        egui::TextEdit::multiline(&mut input)
                            .hint_text("Enter text to translate...")
                            .desired_rows(6)
                            .desired_width(f32::INFINITY),
                    );
                    if edit.changed() {
                        events.push(UiEvent::Input(input.clone()));
                    }

                    ui.horizontal(|ui| {
                        let before = language;
                        egui::ComboBox::from_id_source("target_language")
                            .selected_text(language.display_name())
                            .show_ui(ui, |ui| {
                                for lang in Language::ALL {
                                    ui.selectable_value(&mut language, lang, lang.display_name());
                                }
                            });
                        if language != before {
                            events.push(UiEvent::Language(language));
                        }

                        let button = egui::Button::new(view.generate.label);
                        if ui.add_enabled(view.generate.enabled, button).clicked() {
                            events.push(UiEvent::Generate);
                        }
                        if view.generate.busy {
                            ui.spinner();
                        }
                    });

                    paint_emotions(ui, &view);
                    paint_results(ui, &view, &mut events);
                });
        });

        for event in events {
            tracing::debug!(?event, "ui event");
            self.apply(event, now);
        }

        if let Some(due) = self.controller.next_deadline() {
            ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
        }
    }
}

fn paint_emotions(ui: &mut egui::Ui, view: &View) {
    let Some(bars) = &view.emotions else {
        return;
    };
    ui.add_space(8.0);
    ui.label(egui::RichText::new("Detected emotions").strong());
    for bar in bars {
        ui.add(
            egui::ProgressBar::new((bar.percentage / 100.0) as f32)
                .text(format!("{}  {:.1}%", bar.label, bar.percentage)),
        );
    }
}

fn paint_results(ui: &mut egui::Ui, view: &View, events: &mut Vec<UiEvent>) {
    let Some(cards) = &view.results else {
        return;
    };
    ui.add_space(8.0);
    for card in cards {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            paint_card(ui, card, events);
        });
    }
}

fn paint_card(ui: &mut egui::Ui, card: &ResultCard, events: &mut Vec<UiEvent>) {
    let align = match card.direction {
        TextDirection::LeftToRight => egui::Align::Min,
        TextDirection::RightToLeft => egui::Align::Max,
    };
    ui.with_layout(egui::Layout::top_down(align), |ui| {
        if !card.kind.is_empty() && !card.is_error {
            ui.small(&card.kind);
        }
        let mut text = egui::RichText::new(&card.text).size(16.0);
        if card.is_error {
            text = text.color(ui.visuals().error_fg_color);
        }
        ui.add(egui::Label::new(text).wrap(true));

        let icon = match card.copy.icon {
            CopyIcon::Copy => icons::COPY,
            CopyIcon::Check => icons::CHECK,
        };
        let button = egui::Button::new(format!("{icon} {}", card.copy.label)).selected(card.copy.copied);
        if ui.add(button).clicked() {
            events.push(UiEvent::Copy(card.index));
        }
    });
}

const CJK_FONTS: &[&str] = &[
    r"C:\Windows\Fonts\msyh.ttc",
    r"C:\Windows\Fonts\simsun.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
];

const ARABIC_FONTS: &[&str] = &[
    r"C:\Windows\Fonts\segoeui.ttf",
    r"C:\Windows\Fonts\arial.ttf",
    "/System/Library/Fonts/GeezaPro.ttc",
    "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansArabic-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

/// Appends the first readable file of each script group as a fallback family.
/// Returns the names of the groups that were found.
fn font_definitions(groups: &[(&'static str, &[&str])]) -> (egui::FontDefinitions, Vec<&'static str>) {
    let mut fonts = egui::FontDefinitions::default();
    let mut loaded = Vec::new();
    for (name, candidates) in groups {
        let Some((path, bytes)) = candidates.iter().find_map(|path| fs::read(path).ok().map(|b| (*path, b))) else {
            tracing::warn!(script = *name, "no fallback font found; some translations may render as boxes");
            continue;
        };
        fonts.font_data.insert((*name).to_owned(), egui::FontData::from_owned(bytes));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push((*name).to_owned());
        }
        tracing::info!(script = *name, font = path, "loaded fallback font");
        loaded.push(*name);
    }
    (fonts, loaded)
}

fn install_fonts(ctx: &egui::Context) {
    let (mut fonts, _) = font_definitions(&[("cjk", CJK_FONTS), ("arabic", ARABIC_FONTS)]);
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

/// Runs the window on the calling thread until it closes.
pub fn run(config: Config, store: FileStore) -> anyhow::Result<()> {
    let client = TranslationClient::new(&config.api_base_url, config.request_timeout())?;
    tracing::info!(endpoint = client.endpoint(), "translation client ready");
    let mut dispatcher = TokioDispatcher::new(client)?;
    let language = config.target_language;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([760.0, 720.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        TITLE,
        native_options,
        Box::new(move |cc| {
            install_fonts(&cc.egui_ctx);
            let ctx = cc.egui_ctx.clone();
            dispatcher.set_wake(move || ctx.request_repaint());
            let system_dark = cc.integration_info.system_theme == Some(eframe::Theme::Dark);
            let copier = ClipboardCopier::with_egui_fallback(cc.egui_ctx.clone());
            let controller = Controller::new(dispatcher, store, copier, language, system_dark);
            tracing::info!(dark = controller.state().is_dark, "ui started");
            Box::new(TranslatorApp { controller })
        }),
    )
    .map_err(|e| anyhow::anyhow!("ui event loop failed: {e}"))
}
