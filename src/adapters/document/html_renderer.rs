//! Paginated HTML slide renderer.
//!
//! Produces a single self-contained document: a cover slide followed by
//! one slide per report section, with previous/next buttons, a progress
//! bar and keyboard navigation. Only one slide is visible at a time.

use html_escape::encode_text;

use crate::domain::report::{Report, ReportSection};
use crate::ports::ReportRenderer;

const STYLE: &str = r#"
body { margin: 0; font-family: "Segoe UI", Helvetica, Arial, sans-serif; background: #f4f6fa; color: #1d2433; }
.progress { position: fixed; top: 0; left: 0; right: 0; height: 6px; background: #dde3ee; }
.progress-bar { height: 100%; width: 0; background: #2f6fed; transition: width 0.3s ease; }
.deck { max-width: 960px; margin: 48px auto 96px; padding: 0 24px; }
.slide { display: none; background: #fff; border-radius: 12px; padding: 48px; box-shadow: 0 4px 24px rgba(29, 36, 51, 0.08); min-height: 420px; }
.slide.active { display: block; }
.slide.cover h1 { font-size: 2.4em; margin-bottom: 0.2em; }
.cover .metrics { display: flex; gap: 24px; margin-top: 32px; }
.cover .metric { flex: 1; background: #eef3fd; border-radius: 8px; padding: 16px; text-align: center; }
.cover .metric strong { display: block; font-size: 1.8em; color: #2f6fed; }
.controls { position: fixed; bottom: 0; left: 0; right: 0; display: flex; justify-content: center; align-items: center; gap: 24px; padding: 16px; background: #fff; border-top: 1px solid #dde3ee; }
.controls button { padding: 8px 20px; border: none; border-radius: 6px; background: #2f6fed; color: #fff; cursor: pointer; }
.controls button:disabled { background: #b8c4dc; cursor: default; }
"#;

const SCRIPT: &str = r#"
(function () {
  var slides = document.querySelectorAll('.slide');
  var counter = document.getElementById('slide-counter');
  var bar = document.getElementById('progress-bar');
  var prev = document.getElementById('prev-slide');
  var next = document.getElementById('next-slide');
  var current = 0;

  function show(index) {
    if (index < 0 || index >= slides.length) { return; }
    slides[current].classList.remove('active');
    current = index;
    slides[current].classList.add('active');
    counter.textContent = (current + 1) + ' / ' + slides.length;
    bar.style.width = ((current + 1) / slides.length * 100) + '%';
    prev.disabled = current === 0;
    next.disabled = current === slides.length - 1;
  }

  prev.addEventListener('click', function () { show(current - 1); });
  next.addEventListener('click', function () { show(current + 1); });

  document.addEventListener('keydown', function (event) {
    switch (event.key) {
      case 'ArrowRight':
      case 'PageDown':
        show(current + 1);
        break;
      case 'ArrowLeft':
      case 'PageUp':
        show(current - 1);
        break;
      case 'Home':
        show(0);
        break;
      case 'End':
        show(slides.length - 1);
        break;
      default:
        return;
    }
    event.preventDefault();
  });

  show(0);
})();
"#;

/// Renders a report as a paginated slide document.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSlideRenderer;

impl HtmlSlideRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_cover(&self, report: &Report) -> String {
        let company = report.company();
        let summary = report.score_summary();

        let mut slide = String::from("<section class=\"slide cover active\" data-index=\"0\">\n");
        slide.push_str("<p>AI Capability Diagnosis</p>\n");
        slide.push_str(&format!("<h1>{}</h1>\n", encode_text(&company.name)));
        slide.push_str(&format!(
            "<p>{} &middot; {} &middot; {}</p>\n",
            encode_text(report.industry_name()),
            encode_text(company.employee_count.label()),
            encode_text(company.revenue.label()),
        ));
        slide.push_str("<div class=\"metrics\">\n");
        slide.push_str(&format!(
            "<div class=\"metric\"><strong>{} / {}</strong>Total score</div>\n",
            summary.total, summary.max_possible
        ));
        slide.push_str(&format!(
            "<div class=\"metric\"><strong>{}</strong>Maturity level</div>\n",
            encode_text(report.maturity_level().label())
        ));
        slide.push_str(&format!(
            "<div class=\"metric\"><strong>{}</strong>Grade</div>\n",
            report.grade()
        ));
        slide.push_str("</div>\n");
        slide.push_str(&format!(
            "<p>Generated {}</p>\n",
            report.generated_at().date_label()
        ));
        slide.push_str("</section>\n");
        slide
    }

    fn render_section(&self, index: usize, section: &ReportSection) -> String {
        let mut slide = format!("<section class=\"slide\" data-index=\"{}\">\n", index);
        slide.push_str(&format!("<h2>{}</h2>\n", encode_text(&section.title)));
        slide.push_str(&body_to_html(&section.body));
        slide.push_str("</section>\n");
        slide
    }
}

impl ReportRenderer for HtmlSlideRenderer {
    fn render(&self, report: &Report) -> String {
        let sections = report.sections();
        let total = sections.len() + 1;

        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!(
            "<title>AI Capability Diagnosis - {}</title>\n",
            encode_text(&report.company().name)
        ));
        html.push_str(&format!("<style>{}</style>\n", STYLE));
        html.push_str("</head>\n<body>\n");
        html.push_str(
            "<div class=\"progress\"><div class=\"progress-bar\" id=\"progress-bar\"></div></div>\n",
        );
        html.push_str("<main class=\"deck\">\n");
        html.push_str(&self.render_cover(report));
        for (i, section) in sections.iter().enumerate() {
            html.push_str(&self.render_section(i + 1, section));
        }
        html.push_str("</main>\n");
        html.push_str("<nav class=\"controls\">\n");
        html.push_str("<button type=\"button\" id=\"prev-slide\">Previous</button>\n");
        html.push_str(&format!(
            "<span id=\"slide-counter\">1 / {}</span>\n",
            total
        ));
        html.push_str("<button type=\"button\" id=\"next-slide\">Next</button>\n");
        html.push_str("</nav>\n");
        html.push_str(&format!("<script>{}</script>\n", SCRIPT));
        html.push_str("</body>\n</html>\n");
        html
    }

    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}

/// Converts a section body into paragraphs and bullet lists.
fn body_to_html(body: &str) -> String {
    let mut html = String::new();

    for block in body.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
        let mut paragraph: Vec<&str> = Vec::new();
        let mut items: Vec<&str> = Vec::new();

        for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(item) = line.strip_prefix("- ") {
                flush_paragraph(&mut html, &mut paragraph);
                items.push(item);
            } else {
                flush_list(&mut html, &mut items);
                paragraph.push(line);
            }
        }
        flush_paragraph(&mut html, &mut paragraph);
        flush_list(&mut html, &mut items);
    }

    html
}

fn flush_paragraph(html: &mut String, lines: &mut Vec<&str>) {
    if lines.is_empty() {
        return;
    }
    html.push_str(&format!("<p>{}</p>\n", encode_text(&lines.join(" "))));
    lines.clear();
}

fn flush_list(html: &mut String, items: &mut Vec<&str>) {
    if items.is_empty() {
        return;
    }
    html.push_str("<ul>\n");
    for item in items.iter() {
        html.push_str(&format!("<li>{}</li>\n", encode_text(item)));
    }
    html.push_str("</ul>\n");
    items.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{
        CategoryScorer, CompanyProfile, EmployeeCountBucket, QuestionId, RevenueBucket,
        Submission,
    };
    use crate::domain::benchmark::{IndustryBenchmarkStore, IndustryId};
    use crate::domain::diagnosis::FallbackReason;
    use crate::domain::foundation::DiagnosisId;
    use crate::domain::maturity::MaturityClassifier;
    use crate::domain::report::{AssemblyInput, NarrativeAssembler, ReportProvenance, SectionKind};
    use crate::domain::strategy::StrategySynthesizer;

    fn report_for(company_name: &str) -> Report {
        let company = CompanyProfile::new(
            company_name,
            IndustryId::parse("manufacturing"),
            EmployeeCountBucket::UpTo50,
            RevenueBucket::Unknown,
        );
        let submission = Submission::new(
            company,
            QuestionId::all().map(|id| (id, 3)),
            "Legacy <ERP> systems",
            "",
        );
        let summary = CategoryScorer::score(&submission);
        let classifier = MaturityClassifier::default();
        let store = IndustryBenchmarkStore::builtin();
        let benchmark = store.lookup(&submission.company().industry);
        let synthesis =
            StrategySynthesizer::default().synthesize(&summary, benchmark, submission.challenges());
        let input = AssemblyInput {
            diagnosis_id: DiagnosisId::new(),
            submission: &submission,
            summary: &summary,
            maturity: classifier.classify(summary.total),
            points_to_next_level: classifier.points_to_next_level(summary.total),
            benchmark,
            synthesis: &synthesis,
        };
        NarrativeAssembler::new().assemble(
            &input,
            ReportProvenance::local(FallbackReason::NoProviderConfigured),
        )
    }

    #[test]
    fn renders_cover_plus_one_slide_per_section() {
        let html = HtmlSlideRenderer::new().render(&report_for("Acme"));

        let slides = html.matches("<section class=\"slide").count();
        assert_eq!(slides, SectionKind::ALL.len() + 1);
        assert!(html.contains("1 / 9"));
        for kind in SectionKind::ALL {
            assert!(html.contains(&format!("<h2>{}</h2>", kind.title())));
        }
    }

    #[test]
    fn only_cover_starts_active() {
        let html = HtmlSlideRenderer::new().render(&report_for("Acme"));

        assert_eq!(html.matches("slide cover active").count(), 1);
        assert_eq!(html.matches(" active\"").count(), 1);
    }

    #[test]
    fn includes_navigation_bindings() {
        let html = HtmlSlideRenderer::new().render(&report_for("Acme"));

        for key in ["ArrowLeft", "ArrowRight", "PageUp", "PageDown", "Home", "End"] {
            assert!(html.contains(&format!("'{}'", key)), "missing binding {}", key);
        }
        assert!(html.contains("id=\"prev-slide\""));
        assert!(html.contains("id=\"next-slide\""));
        assert!(html.contains("id=\"progress-bar\""));
    }

    #[test]
    fn escapes_user_text() {
        let html = HtmlSlideRenderer::new().render(&report_for("<script>alert(1)</script>"));

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("Legacy <ERP>"));
    }

    #[test]
    fn body_lists_become_list_items() {
        let html = body_to_html("Intro line.\n\n- first\n- second\n\nClosing.");

        assert_eq!(
            html,
            "<p>Intro line.</p>\n<ul>\n<li>first</li>\n<li>second</li>\n</ul>\n<p>Closing.</p>\n"
        );
    }

    #[test]
    fn mixed_block_splits_paragraph_and_list() {
        let html = body_to_html("Heading:\n- a & b");

        assert_eq!(html, "<p>Heading:</p>\n<ul>\n<li>a &amp; b</li>\n</ul>\n");
    }

    #[test]
    fn content_type_is_html() {
        assert_eq!(
            HtmlSlideRenderer::new().content_type(),
            "text/html; charset=utf-8"
        );
    }
}
