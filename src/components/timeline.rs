use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;
use yew_hooks::use_visible;

struct Phase {
    name: &'static str,
    timing: &'static str,
    gains: &'static str,
    /// Position along the timeline, percent.
    position: i32,
    /// Representative multiple, plotted on the y axis.
    multiple: i32,
    color: RGBColor,
}

const PHASES: [Phase; 4] = [
    Phase {
        name: "Seed/Private",
        timing: "12-18 months early",
        gains: "50-100x",
        position: 15,
        multiple: 100,
        color: RGBColor(16, 185, 129),
    },
    Phase {
        name: "Pre-Sale",
        timing: "6-12 months early",
        gains: "10-50x",
        position: 35,
        multiple: 50,
        color: RGBColor(59, 130, 246),
    },
    Phase {
        name: "IDO/IEO",
        timing: "1-3 months early",
        gains: "2-10x",
        position: 60,
        multiple: 10,
        color: RGBColor(139, 92, 246),
    },
    Phase {
        name: "CEX Listing",
        timing: "Public launch",
        gains: "1-3x",
        position: 85,
        multiple: 3,
        color: RGBColor(249, 115, 22),
    },
];

/// Decorative chart of when each investor class enters the market and what
/// multiple is still on the table at that point.
#[function_component(InvestmentTimeline)]
pub fn investment_timeline() -> Html {
    let canvas_ref = use_node_ref();
    let wrapper_ref = use_node_ref();
    let visible = use_visible(wrapper_ref.clone(), false);

    // Draw the gains curve once the canvas exists
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .unwrap()
                        .unwrap()
                        .dyn_into::<web_sys::CanvasRenderingContext2d>()
                        .unwrap();
                    context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

                    canvas.set_width(560);
                    canvas.set_height(280);

                    let backend = CanvasBackend::with_canvas_object(canvas.clone()).unwrap();
                    let root = backend.into_drawing_area();
                    root.fill(&WHITE).unwrap();

                    let mut chart = ChartBuilder::on(&root)
                        .margin(12)
                        .x_label_area_size(28)
                        .y_label_area_size(44)
                        .build_cartesian_2d(0..100, 0..110)
                        .unwrap();

                    chart
                        .configure_mesh()
                        .disable_x_mesh()
                        .disable_y_mesh()
                        .x_labels(2)
                        .x_label_formatter(&|x| {
                            match *x {
                                x if x < 20 => "Early".to_string(),
                                x if x > 80 => "Late".to_string(),
                                _ => String::new(),
                            }
                        })
                        .y_label_formatter(&|y| format!("{}x", y))
                        .axis_style(RGBColor(209, 213, 219).stroke_width(1))
                        .label_style(("sans-serif", 12))
                        .draw()
                        .unwrap();

                    chart
                        .draw_series(LineSeries::new(
                            PHASES.iter().map(|p| (p.position, p.multiple)),
                            RGBColor(99, 102, 241).stroke_width(3),
                        ))
                        .unwrap();

                    chart
                        .draw_series(PHASES.iter().map(|p| {
                            Circle::new((p.position, p.multiple), 6, p.color.filled())
                        }))
                        .unwrap();
            }
            || ()
        });
    }

    html! {
        <div ref={wrapper_ref} class={classes!("timeline", visible.then_some("visible"))}>
            <div class="timeline-badges">
                <div class="timeline-badge-group">
                    <span class="timeline-badge members">{"CapitalNodes Members"}</span>
                    <div class="timeline-badge-note">{"Get in early"}</div>
                </div>
                <div class="timeline-badge-group">
                    <span class="timeline-badge regular">{"Regular Investors"}</span>
                    <div class="timeline-badge-note">{"Too late"}</div>
                </div>
            </div>

            <canvas
                ref={canvas_ref}
                width="560"
                height="280"
                style="max-width: 100%;"
            />

            <div class="timeline-phases">
                {
                    PHASES.iter().enumerate().map(|(i, phase)| {
                        html! {
                            <div class="timeline-phase" style={format!("transition-delay: {}ms", i * 200)}>
                                <div class="phase-name">{phase.name}</div>
                                <div class="phase-gains">{phase.gains}</div>
                                <div class="phase-timing">{phase.timing}</div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="timeline-caption">
                {"Investment Timeline: Earlier = Higher Returns"}
            </div>
        </div>
    }
}
