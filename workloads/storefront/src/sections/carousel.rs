//! Home-page hero carousel.

use super::escape_html;

/// One carousel slide.
struct Slide {
    title: &'static str,
    text: &'static str,
    cta_label: &'static str,
    cta_href: &'static str,
}

const SLIDES: [Slide; 4] = [
    Slide {
        title: "Nouveautés",
        text: "Découvrez les derniers arrivages pour votre studio.",
        cta_label: "Voir les nouveautés",
        cta_href: "/recherche?q=nouveau",
    },
    Slide {
        title: "Promotions",
        text: "Jusqu'à -50% sur une sélection de matériel professionnel.",
        cta_label: "Profiter des offres",
        cta_href: "/solde",
    },
    Slide {
        title: "Start Tattoo",
        text: "Tout l'équipement pour bien démarrer votre carrière de tatoueur.",
        cta_label: "Composer mon kit",
        cta_href: "/machines",
    },
    Slide {
        title: "Actualités",
        text: "Conventions, ateliers et nouveautés de la scène tattoo suisse.",
        cta_label: "En savoir plus",
        cta_href: "/marques",
    },
];

/// Render the hero carousel with its rotation script.
pub fn render_carousel() -> String {
    let slides: String = SLIDES
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let active = if i == 0 { " active" } else { "" };
            format!(
                r#"        <div class="carousel-slide{active}">
            <h2>{title}</h2>
            <p>{text}</p>
            <a class="cta" href="{href}">{label}</a>
        </div>
"#,
                active = active,
                title = escape_html(slide.title),
                text = escape_html(slide.text),
                href = slide.cta_href,
                label = escape_html(slide.cta_label),
            )
        })
        .collect();

    let dots: String = (0..SLIDES.len())
        .map(|i| {
            let active = if i == 0 { r#" class="active""# } else { "" };
            format!(r#"<button{active} data-slide="{i}" aria-label="Diapositive {n}"></button>"#, n = i + 1)
        })
        .collect();

    format!(
        r#"    <section class="carousel" id="hero-carousel">
{slides}        <div class="carousel-dots">{dots}</div>
    </section>
    <script>
    (function () {{
        var slides = document.querySelectorAll('#hero-carousel .carousel-slide');
        var dots = document.querySelectorAll('#hero-carousel .carousel-dots button');
        var current = 0;
        function show(i) {{
            slides[current].classList.remove('active');
            dots[current].classList.remove('active');
            current = i;
            slides[current].classList.add('active');
            dots[current].classList.add('active');
        }}
        dots.forEach(function (dot, i) {{
            dot.addEventListener('click', function () {{ show(i); }});
        }});
        setInterval(function () {{ show((current + 1) % slides.length); }}, 6000);
    }})();
    </script>"#,
        slides = slides,
        dots = dots,
    )
}
