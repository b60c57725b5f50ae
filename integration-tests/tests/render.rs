use rootscope_expr::Formula;
use rootscope_plot::{Command, Recorder, SampledCurve, Style, render};
use rootscope_solvers::equation::bisection::{self, Config, Status};

const WIDTH: f32 = 600.0;
const HEIGHT: f32 = 400.0;

/// Position of a command in the back-to-front layer order.
fn layer(command: &Command, style: &Style) -> u8 {
    match command {
        Command::Clear => 0,
        Command::Text { .. } => 1,
        Command::Path { stroke, .. } if *stroke == style.grid => 1,
        Command::Path { stroke, .. } if *stroke == style.axis => 2,
        Command::Path { stroke, .. } if *stroke == style.curve => 3,
        Command::FilledCircle { .. } => 4,
        Command::Path { stroke, .. } if *stroke == style.bounds => 5,
        Command::Ring { .. } => 6,
        Command::Path { .. } => panic!("unexpected path: {command:?}"),
    }
}

fn solve_and_render(text: &str, bracket: [f64; 2]) -> (bisection::Solution, Vec<Command>) {
    let formula = Formula::new(text);
    let config = Config::default();
    let solution = bisection::solve_unobserved(&formula, bracket, &config).expect("should solve");

    let mut surface = Recorder::new(WIDTH, HEIGHT);
    render(&mut surface, &formula, bracket, &solution.history, solution.root);
    (solution, surface.into_commands())
}

#[test]
fn layers_are_drawn_back_to_front() {
    let style = Style::default();
    let (solution, commands) = solve_and_render("x^2 - 2", [0.0, 2.0]);
    assert_eq!(solution.status, Status::Converged);

    let layers: Vec<u8> = commands.iter().map(|c| layer(c, &style)).collect();
    assert!(layers.windows(2).all(|w| w[0] <= w[1]), "{layers:?}");
    assert_eq!(layers.first(), Some(&0));
    assert_eq!(layers.last(), Some(&6));
    for expected in 0..=6 {
        assert!(layers.contains(&expected), "missing layer {expected}");
    }
}

#[test]
fn one_marker_per_record_with_last_highlighted() {
    let style = Style::default();
    let (solution, commands) = solve_and_render("x^3 - x - 2", [1.0, 2.0]);

    let fills: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            Command::FilledCircle { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect();

    assert_eq!(fills.len(), solution.history.len());
    let (last, rest) = fills.split_last().expect("at least one marker");
    assert_eq!(*last, style.marker_highlight);
    assert!(rest.iter().all(|fill| *fill == style.marker_fill));
}

#[test]
fn singularity_is_left_out_of_the_curve() {
    let formula = Formula::new("1/x");
    let curve = SampledCurve::sample(&formula, [-1.0, 1.0], Style::default().sample_intervals);

    assert_eq!(curve.points().len(), 400);
    assert!(curve.points().iter().all(|[x, y]| *x != 0.0 && y.is_finite()));

    let [min, max] = curve.y_range();
    assert!(min.is_finite() && max.is_finite());
    assert!(min < -100.0 && max > 100.0);
}

#[test]
fn root_ring_sits_on_the_x_axis() {
    let (solution, commands) = solve_and_render("x", [-1.0, 1.0]);
    assert_eq!(solution.root, 0.0);

    let Some(Command::Ring { center, .. }) = commands.last() else {
        panic!("last command should be the root ring");
    };
    assert_eq!(center.x, WIDTH / 2.0);
    assert_eq!(center.y, HEIGHT / 2.0);
}
