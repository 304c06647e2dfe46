use std::fmt::Write;

use zenith_core::case_studies::CaseStudy;
use zenith_core::html::escape;

use super::layout::document;

/// Which side of a section the image sits on.
#[derive(Clone, Copy)]
enum ImageSide {
    Left,
    Right,
}

fn section(heading: &str, text: &str, image: Option<&str>, alt: &str, side: ImageSide) -> String {
    let text_block = format!(
        "<div>\n<h2>{}</h2>\n<p class=\"narrative\">{}</p>\n</div>",
        escape(heading),
        escape(text),
    );
    let image_block = image
        .map(|src| format!("<img src=\"{}\" alt=\"{}\" />", escape(src), escape(alt)))
        .unwrap_or_default();

    let (first, second) = match side {
        ImageSide::Left => (image_block, text_block),
        ImageSide::Right => (text_block, image_block),
    };
    format!("<section class=\"section\">\n{first}\n{second}\n</section>")
}

/// Detail page: header, hero, then problem/approach/results with
/// alternating image placement.
pub fn render_detail(study: &CaseStudy) -> String {
    let mut body = String::new();

    let _ = writeln!(body, "<h1>{}</h1>", escape(study.title));
    let _ = writeln!(
        body,
        "<p class=\"meta\">Industry: {} · Services: {}</p>",
        escape(study.industry),
        escape(&study.services.join(", ")),
    );
    let _ = writeln!(
        body,
        "<img class=\"hero\" src=\"{}\" alt=\"{}\" />",
        escape(study.image),
        escape(study.title),
    );

    let sections = [
        ("Problem", study.problem, study.problem_image, ImageSide::Right),
        ("Approach", study.approach, study.approach_image, ImageSide::Left),
        ("Results", study.results, study.results_image, ImageSide::Right),
    ];
    for (heading, text, image, side) in sections {
        let alt = format!("{} – {}", study.title, heading.to_lowercase());
        body.push_str(&section(heading, text, image, &alt, side));
        body.push('\n');
    }

    body.push_str(
        "<div class=\"cta\"><a href=\"/contact\" class=\"btn-neon\">Discuss Your Project</a></div>",
    );

    document(&format!("{} | Case Study", study.title), study.problem, &body)
}

/// Card grid linking to every case study.
pub fn render_index(studies: &[CaseStudy]) -> String {
    let mut body = String::from("<h1>Case Studies</h1>\n<div class=\"cards\">\n");

    for study in studies {
        let _ = writeln!(
            body,
            "<a class=\"card\" href=\"/portfolio/{slug}\"><img src=\"{image}\" alt=\"{title}\" />\
             <div><h2>{title}</h2><p class=\"meta\">{industry}</p></div></a>",
            slug = escape(study.slug),
            image = escape(study.image),
            title = escape(study.title),
            industry = escape(study.industry),
        );
    }
    body.push_str("</div>");

    document(
        "Portfolio | Case Studies",
        "Selected client work and the results it delivered.",
        &body,
    )
}
