use crate::gui::animation::AnimationTask;
use crate::gui::chart::{self, CursorAction, State};
use crate::gui::legend;
use crate::gui::theme::{self, ChartColors};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wedge::{Hover, LOGICAL_SIZE, Point, SURFACE_SCALE};

/// Gap between the pointer and the tooltip's top-left corner.
const TOOLTIP_OFFSET: f64 = 12.0;
const LEGEND_COLUMNS: u32 = 3;
const DEFAULT_TITLE: &str = "Donut";
const SLICE_CURSOR: &str = "pointer";
const DEFAULT_CURSOR: &str = "default";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub position: Point,
    pub visible: bool,
}

impl Tooltip {
    pub fn apply(&mut self, hover: Hover) {
        match hover {
            Hover::Show { text, at, .. } => {
                self.text = text;
                self.position = at;
                self.visible = true;
            }
            Hover::Hide => self.visible = false,
        }
    }

    pub fn margin_start(&self) -> i32 {
        (self.position.x + TOOLTIP_OFFSET).round() as i32
    }

    pub fn margin_top(&self) -> i32 {
        (self.position.y + TOOLTIP_OFFSET).round() as i32
    }
}

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub tooltip: Tooltip,
    pub drawing_area: gtk::DrawingArea,
    pub animation: Option<AnimationTask>,
}

#[derive(Debug)]
pub enum AppMsg {
    CursorMove(Point),
    CursorLeave,
    SkipAnimation,
}

impl AppModel {
    fn apply_cursor(&mut self, action: CursorAction) {
        if action.changed {
            self.drawing_area
                .set_cursor_from_name(Some(pointer_cursor(&action.hover)));
        }
        self.tooltip.apply(action.hover);
    }
}

/// Pointer shape over the chart: a hand over a slice, the default elsewhere.
fn pointer_cursor(hover: &Hover) -> &'static str {
    match hover {
        Hover::Show { .. } => SLICE_CURSOR,
        Hover::Hide => DEFAULT_CURSOR,
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = State;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some(&title),
            set_resizable: false,
            add_css_class: "donut-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::SkipAnimation);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "legend"]
                gtk::FlowBox {
                    add_css_class: "donut-legend",
                    set_selection_mode: gtk::SelectionMode::None,
                    set_max_children_per_line: LEGEND_COLUMNS,
                    set_width_request: LOGICAL_SIZE as i32,
                },

                #[name = "overlay"]
                gtk::Overlay {
                    #[name = "drawing_area"]
                    gtk::DrawingArea {
                        set_content_width: LOGICAL_SIZE as i32,
                        set_content_height: LOGICAL_SIZE as i32,
                        add_css_class: "donut-drawing-area",

                        add_controller = gtk::EventControllerMotion {
                            connect_motion[sender] => move |_, x, y| {
                                sender.input(AppMsg::CursorMove(Point::new(x, y)));
                            },
                            connect_leave[sender] => move |_| {
                                sender.input(AppMsg::CursorLeave);
                            }
                        }
                    },

                    add_overlay = &gtk::Label {
                        add_css_class: "donut-popup",
                        set_halign: gtk::Align::Start,
                        set_valign: gtk::Align::Start,
                        set_can_target: false,
                        #[watch]
                        set_visible: model.tooltip.visible,
                        #[watch]
                        set_label: &model.tooltip.text,
                        #[watch]
                        set_margin_start: model.tooltip.margin_start(),
                        #[watch]
                        set_margin_top: model.tooltip.margin_top(),
                    }
                }
            }
        }
    }

    fn init(
        state: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let options = state.chart.options().clone();
        let title = if options.name.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            options.name.clone()
        };

        theme::load_css(&options);
        let colors = ChartColors::from_options(&options);

        let state = Rc::new(RefCell::new(state));

        let model = AppModel {
            state: state.clone(),
            tooltip: Tooltip::default(),
            drawing_area: gtk::DrawingArea::default(),
            animation: None,
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        legend::populate(&widgets.legend, state.borrow().chart.slices());

        let state_draw = state.clone();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            cr.scale(1.0 / SURFACE_SCALE, 1.0 / SURFACE_SCALE);
            if let Err(e) = chart::draw(cr, &state_draw.borrow(), &colors) {
                log::error!("Drawing error: {}", e);
            }
        });

        match AnimationTask::start(state, &widgets.drawing_area) {
            Ok(task) => model.animation = Some(task),
            Err(e) => log::warn!("Not animating chart: {}", e),
        }

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::CursorMove(point) => {
                let action = self.state.borrow_mut().update_cursor(point);
                self.apply_cursor(action);
            }
            AppMsg::CursorLeave => {
                let action = self.state.borrow_mut().clear_hover();
                self.apply_cursor(action);
            }
            AppMsg::SkipAnimation => {
                if let Some(task) = self.animation.take()
                    && task.stop()
                {
                    self.drawing_area.queue_draw();
                }
            }
        }
    }
}
