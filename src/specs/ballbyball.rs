// src/specs/ballbyball.rs
//! Scraping *spec* for the KNCB match centre ball-by-ball page.
//!
//! Wickets:
//!   `[class*=WicketInformationContainer]` inside a `BallContainerInner`;
//!   the over number sits in that inner container's `StandardContainer`.
//!   Details = player name, dismissal, then `<heading><value>` stat items
//!   (`R24 B18 4s3 6s1`).
//! Sixes / fours:
//!   `BallContainer` carrying the site's six (`kByDFX`) or four (`kTpgGw`)
//!   class. Details = run text + commentary.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{FIELD_SEP, UNKNOWN_OVER};
use crate::core::sanitize::{join_parts, normalize_ws};
use crate::highlights::encode_extraction_error;

use super::Extractor;

const WICKET_INFO: &str = r#"[class*="BallDetailViewStyle__WicketInformationContainer"]"#;
const SIX_BALL: &str = ".BallDetailViewStyle__BallContainer-gx5g4w-1.kByDFX";
const FOUR_BALL: &str = ".BallDetailViewStyle__BallContainer-gx5g4w-1.kTpgGw";
const BALL_INNER: &str = ".BallDetailViewStyle__BallContainerInner-gx5g4w-2";
const OVER_NUMBER: &str = ".BallDetailViewStyle__StandardContainer-gx5g4w-3";
const RUN_TEXT: &str = ".BallDetailViewStyle__CenterStandardContainer-gx5g4w-4";
const COMMENTARY: &str = ".BallDetailViewStyle__CommentaryContainer-gx5g4w-5";
const PERSON_NAME: &str = ".BallDetailViewStyle__PersonName-gx5g4w-9";
const DISMISSAL: &str = ".BallDetailViewStyle__PersonDismissal-gx5g4w-10";
const STAT_ITEM: &str = ".BallDetailViewStyle__StatItem-gx5g4w-12";
const STAT_HEADING: &str = ".BallDetailViewStyle__StatHeading-gx5g4w-13";
const STAT_VALUE: &str = ".BallDetailViewStyle__StatValue-gx5g4w-14";

struct Selectors {
    wicket_info: Selector,
    six_ball: Selector,
    four_ball: Selector,
    ball_inner: Selector,
    over_number: Selector,
    run_text: Selector,
    commentary: Selector,
    person_name: Selector,
    dismissal: Selector,
    stat_item: Selector,
    stat_heading: Selector,
    stat_value: Selector,
}

impl Selectors {
    fn new() -> Result<Self, String> {
        let p = |css: &str| Selector::parse(css).map_err(|e| format!("bad selector {css}: {e:?}"));
        Ok(Self {
            wicket_info: p(WICKET_INFO)?,
            six_ball: p(SIX_BALL)?,
            four_ball: p(FOUR_BALL)?,
            ball_inner: p(BALL_INNER)?,
            over_number: p(OVER_NUMBER)?,
            run_text: p(RUN_TEXT)?,
            commentary: p(COMMENTARY)?,
            person_name: p(PERSON_NAME)?,
            dismissal: p(DISMISSAL)?,
            stat_item: p(STAT_ITEM)?,
            stat_heading: p(STAT_HEADING)?,
            stat_value: p(STAT_VALUE)?,
        })
    }
}

/// The match centre's ball-by-ball commentary page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BallByBall;

impl Extractor for BallByBall {
    fn extract(&self, markup: &str) -> Vec<String> {
        let sel = match Selectors::new() {
            Ok(s) => s,
            Err(msg) => {
                loge!("Extract: {}", msg);
                return vec![encode_extraction_error(&msg)];
            }
        };
        let doc = Html::parse_document(markup);

        let wickets = doc.select(&sel.wicket_info).count();
        let sixes = doc.select(&sel.six_ball).count();
        let fours = doc.select(&sel.four_ball).count();
        logd!("Extract: containers wickets={} sixes={} fours={}", wickets, sixes, fours);

        let mut out = Vec::with_capacity(wickets + sixes + fours);

        for wicket in doc.select(&sel.wicket_info) {
            let over = closest(wicket, &sel.ball_inner)
                .and_then(|inner| first_text(inner, &sel.over_number));
            let name = first_text(wicket, &sel.person_name).unwrap_or_default();
            let dismissal = first_text(wicket, &sel.dismissal).unwrap_or_default();
            let stats: Vec<String> = wicket
                .select(&sel.stat_item)
                .map(|stat| {
                    let heading = first_text(stat, &sel.stat_heading).unwrap_or_default();
                    let value = first_text(stat, &sel.stat_value).unwrap_or_default();
                    join!(heading, &value)
                })
                .collect();
            let stats = join_parts(stats.iter().map(String::as_str));
            out.push(line(over, "WICKET", &join_parts([name.as_str(), dismissal.as_str(), stats.as_str()])));
        }

        for (ball_sel, token) in [(&sel.six_ball, "SIX"), (&sel.four_ball, "FOUR")] {
            for ball in doc.select(ball_sel) {
                let over = first_text(ball, &sel.over_number);
                let runs = first_text(ball, &sel.run_text).unwrap_or_default();
                let commentary = first_text(ball, &sel.commentary).unwrap_or_default();
                out.push(line(over, token, &join_parts([runs.as_str(), commentary.as_str()])));
            }
        }

        out
    }
}

fn line(over: Option<String>, token: &str, details: &str) -> String {
    let over = over.filter(|o| !o.is_empty()).unwrap_or_else(|| s!(UNKNOWN_OVER));
    format!("{over}{FIELD_SEP}{token}{FIELD_SEP}{details}")
}

fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

fn first_text(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    el.select(sel).next().map(text_of)
}

/// Nearest element matching `sel`, starting with `el` itself.
fn closest<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    if sel.matches(&el) {
        return Some(el);
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| sel.matches(a))
}
