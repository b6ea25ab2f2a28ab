use libadwaita as adw;
use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use gtk::prelude::*;
use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::Level;
use uconv_core::{get_default_registry, Config, ConverterState, Error, Severity, NO_RESULT};

const TIP: &str = "Tip: You can use decimals, e.g. 12.5 or 12,5";

type SharedState = Rc<RefCell<ConverterState<'static>>>;

/// Widgets the callbacks need to reach
#[derive(Clone)]
struct Widgets {
    window: adw::ApplicationWindow,
    conversion: gtk::DropDown,
    value: gtk::Entry,
    result: gtk::Label,
}

fn init_logging() {
    let log_path = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("uconv")
        .join("uconv_desk.log");

    let _ = std::fs::create_dir_all(
        log_path
            .parent()
            .unwrap_or_else(|| Path::new(".")),
    );

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(move || -> Box<dyn Write + Send> {
            match std::fs::File::options()
                .create(true)
                .append(true)
                .open(&log_path)
            {
                Ok(f) => Box::new(f),
                Err(_) => Box::new(std::io::stdout()),
            }
        })
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> glib::ExitCode {
    init_logging();

    let app = Application::builder()
        .application_id("com.uconv.desk")
        .build();

    app.connect_activate(show_converter_window);

    app.run()
}

fn load_state() -> uconv_core::Result<(ConverterState<'static>, String)> {
    let registry = get_default_registry();
    let errors = registry.validate();
    if !errors.is_empty() {
        return Err(Error::RegistryValidation(errors.join("; ")));
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config load failed: {}; using defaults.", e);
            Config::default()
        }
    };

    let start = config
        .startup_category(registry)
        .ok_or_else(|| Error::RegistryValidation("Registry has no categories".into()))?;
    let mut state = ConverterState::new(registry, start)?;
    state.set_value(config.ui.initial_value.clone());

    Ok((state, config.ui.initial_value))
}

fn show_converter_window(app: &Application) {
    let (state, initial_value) = match load_state() {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::error!("Failed to start converter: {}", err);
            return;
        }
    };
    let state: SharedState = Rc::new(RefCell::new(state));

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .default_width(520)
        .default_height(280)
        .resizable(false)
        .title("Smart Unit Converter")
        .build();

    let content = gtk::Box::new(gtk::Orientation::Vertical, 8);
    content.set_margin_top(14);
    content.set_margin_bottom(10);
    content.set_margin_start(12);
    content.set_margin_end(12);
    window.set_content(Some(&content));

    let title = gtk::Label::new(Some("Smart Unit Converter"));
    title.add_css_class("title-2");
    content.append(&title);

    let subtitle = gtk::Label::new(Some(
        "Choose a category, conversion type, and enter a value.",
    ));
    subtitle.set_margin_bottom(10);
    content.append(&subtitle);

    let grid = gtk::Grid::new();
    grid.set_row_spacing(6);
    grid.set_column_spacing(8);
    content.append(&grid);

    let categories = get_default_registry().list_categories();
    let category = gtk::DropDown::from_strings(&categories);
    let conversion = gtk::DropDown::from_strings(&state.borrow().conversions());
    let value = gtk::Entry::new();
    value.set_text(&initial_value);
    let result = gtk::Label::new(Some(NO_RESULT));
    result.set_halign(gtk::Align::Start);
    result.add_css_class("title-4");

    if let Some(idx) = categories
        .iter()
        .position(|name| *name == state.borrow().category())
    {
        category.set_selected(idx as u32);
    }

    attach_row(&grid, 0, "Category:", &category);
    attach_row(&grid, 1, "Conversion:", &conversion);
    attach_row(&grid, 2, "Value:", &value);

    let button_row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    let convert_btn = gtk::Button::with_label("Convert");
    let clear_btn = gtk::Button::with_label("Clear");
    button_row.append(&convert_btn);
    button_row.append(&clear_btn);
    grid.attach(&button_row, 1, 3, 1, 1);

    attach_row(&grid, 4, "Result:", &result);

    let tip = gtk::Label::new(Some(TIP));
    tip.set_margin_top(10);
    content.append(&tip);

    let widgets = Widgets {
        window: window.clone(),
        conversion,
        value,
        result,
    };

    {
        let state = state.clone();
        let widgets = widgets.clone();
        category.connect_selected_notify(move |dd| {
            let Some(name) = categories.get(dd.selected() as usize) else {
                return;
            };
            let labels = {
                let mut state = state.borrow_mut();
                if let Err(err) = state.select_category(name) {
                    report_error(&widgets.window, &err.into());
                    return;
                }
                state.conversions()
            };
            widgets
                .conversion
                .set_model(Some(&gtk::StringList::new(&labels)));
            widgets.conversion.set_selected(0);
            widgets.result.set_text(NO_RESULT);
        });
    }

    {
        let state = state.clone();
        let window = window.clone();
        widgets.conversion.connect_selected_notify(move |dd| {
            let mut state = state.borrow_mut();
            let labels = state.conversions();
            let Some(label) = labels.get(dd.selected() as usize) else {
                return;
            };
            if let Err(err) = state.select_conversion(label) {
                drop(state);
                report_error(&window, &err.into());
            }
        });
    }

    {
        let state = state.clone();
        let widgets = widgets.clone();
        convert_btn.connect_clicked(move |_| run_conversion(&state, &widgets));
    }

    {
        // Enter in the value field converts
        let state = state.clone();
        let widgets = widgets.clone();
        let entry = widgets.value.clone();
        entry.connect_activate(move |_| run_conversion(&state, &widgets));
    }

    {
        let state = state.clone();
        let widgets = widgets.clone();
        clear_btn.connect_clicked(move |_| {
            state.borrow_mut().clear();
            widgets.value.set_text("");
            widgets.result.set_text(NO_RESULT);
            widgets.value.grab_focus();
        });
    }

    window.present();
    widgets.value.grab_focus();
}

fn attach_row(grid: &gtk::Grid, row: i32, label: &str, widget: &impl IsA<gtk::Widget>) {
    let label = gtk::Label::new(Some(label));
    label.set_halign(gtk::Align::Start);
    grid.attach(&label, 0, row, 1, 1);
    grid.attach(widget, 1, row, 1, 1);
}

fn run_conversion(state: &SharedState, widgets: &Widgets) {
    let outcome = {
        let mut state = state.borrow_mut();
        state.set_value(widgets.value.text().as_str());
        state.convert().map(str::to_string)
    };

    match outcome {
        Ok(formatted) => widgets.result.set_text(&formatted),
        Err(err) => report_error(&widgets.window, &err.into()),
    }
}

#[allow(deprecated)]
fn report_error(window: &adw::ApplicationWindow, err: &Error) {
    let (title, kind) = match err.severity() {
        Severity::Warning => ("Invalid input", gtk::MessageType::Warning),
        Severity::Error => ("Error", gtk::MessageType::Error),
    };
    tracing::info!("{}: {}", title, err);

    let dialog = gtk::MessageDialog::new(
        Some(window),
        gtk::DialogFlags::MODAL | gtk::DialogFlags::DESTROY_WITH_PARENT,
        kind,
        gtk::ButtonsType::Ok,
        err.user_message(),
    );
    dialog.set_title(Some(title));
    dialog.connect_response(|dialog, _| dialog.close());
    dialog.present();
}
