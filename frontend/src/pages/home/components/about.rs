use leptos::*;

const STRENGTHS: &[&str] = &[
    "Supervised learning techniques (regression, classification)",
    "Ensemble methods for improved model performance",
    "Unsupervised learning and clustering algorithms",
    "Mathematical optimization and convergence analysis",
    "Model evaluation and hyperparameter tuning",
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="container mx-auto px-4 py-20 bg-white dark:bg-slate-950/50 rounded-2xl my-20">
            <div class="max-w-3xl">
                <h2 class="text-3xl md:text-4xl font-bold text-slate-900 dark:text-slate-50 mb-6">
                    "About This Portfolio"
                </h2>
                <div class="space-y-4 text-slate-600 dark:text-slate-300 text-lg leading-relaxed">
                    <p>
                        "This portfolio represents my journey into machine learning and data science. Each project demonstrates a deep understanding of fundamental ML algorithms, their mathematical foundations, and practical implementations."
                    </p>
                    <p>
                        "Rather than relying solely on high-level libraries, I've implemented many algorithms from scratch to truly understand how they work. This hands-on approach has strengthened my grasp of:"
                    </p>
                    <ul class="list-disc list-inside space-y-2 ml-4">
                        {STRENGTHS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
