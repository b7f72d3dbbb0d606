//! Application template catalog.
//!
//! Each template is a complete, self-contained `App` component written
//! against Tailwind utility classes. The same source is valid as both
//! `.jsx` and `.tsx`, so the catalog is keyed only by template id.

/// Identifier for an application template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateId {
    #[default]
    Basic,
    Dashboard,
    Landing,
    Blog,
}

impl TemplateId {
    /// All template names, in presentation order.
    pub const NAMES: &'static [&'static str] = &["basic", "dashboard", "landing", "blog"];

    /// Strict lookup by name, used by the CLI parser to reject unknown ids.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "basic" => Some(Self::Basic),
            "dashboard" => Some(Self::Dashboard),
            "landing" => Some(Self::Landing),
            "blog" => Some(Self::Blog),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Dashboard => "dashboard",
            Self::Landing => "landing",
            Self::Blog => "blog",
        }
    }

    /// The `App` component source for this template.
    pub fn app_source(&self) -> &'static str {
        match self {
            Self::Basic => BASIC,
            Self::Dashboard => DASHBOARD,
            Self::Landing => LANDING,
            Self::Blog => BLOG,
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog lookup by name.
///
/// Unknown names fall back to the `basic` blob. The CLI parser rejects
/// unknown ids before this point; the fallback is a last-resort default,
/// not the validation path.
pub fn app_source_for(name: &str) -> &'static str {
    TemplateId::from_name(name).unwrap_or_default().app_source()
}

const BASIC: &str = r##"function App() {
  return (
    <div className="flex min-h-screen flex-col items-center justify-center bg-gray-50">
      <h1 className="text-4xl font-bold tracking-tight text-gray-900">
        Hello, world
      </h1>
      <p className="mt-4 text-lg text-gray-600">
        Edit{' '}
        <code className="rounded bg-gray-200 px-1.5 py-0.5 font-mono text-sm">
          src/App.jsx
        </code>{' '}
        and save to reload.
      </p>
      <a
        className="mt-6 text-sm font-medium text-indigo-600 hover:text-indigo-500"
        href="https://tailwindcss.com/docs"
        target="_blank"
        rel="noreferrer"
      >
        Tailwind CSS docs &rarr;
      </a>
    </div>
  )
}

export default App
"##;

const DASHBOARD: &str = r##"const stats = [
  { label: 'Total Revenue', value: '$45,231', change: '+20.1%' },
  { label: 'Subscriptions', value: '2,350', change: '+180' },
  { label: 'Active Now', value: '573', change: '+201' },
  { label: 'Bounce Rate', value: '24%', change: '-4%' },
]

const navigation = ['Overview', 'Customers', 'Products', 'Settings']

function App() {
  return (
    <div className="flex min-h-screen bg-gray-100">
      <aside className="hidden w-64 flex-col bg-gray-900 p-6 md:flex">
        <span className="text-xl font-bold text-white">Acme Inc</span>
        <nav className="mt-8 flex flex-col gap-1">
          {navigation.map((item, index) => (
            <a
              key={item}
              href="#"
              className={
                index === 0
                  ? 'rounded-md bg-gray-800 px-3 py-2 text-sm font-medium text-white'
                  : 'rounded-md px-3 py-2 text-sm font-medium text-gray-400 hover:bg-gray-800 hover:text-white'
              }
            >
              {item}
            </a>
          ))}
        </nav>
      </aside>
      <div className="flex-1">
        <header className="flex items-center justify-between border-b border-gray-200 bg-white px-6 py-4">
          <h1 className="text-lg font-semibold text-gray-900">Dashboard</h1>
          <button className="rounded-md bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-500">
            New Report
          </button>
        </header>
        <main className="p-6">
          <div className="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            {stats.map((stat) => (
              <div key={stat.label} className="rounded-lg bg-white p-5 shadow">
                <p className="text-sm text-gray-500">{stat.label}</p>
                <p className="mt-1 text-2xl font-semibold text-gray-900">
                  {stat.value}
                </p>
                <p className="mt-1 text-xs text-green-600">{stat.change}</p>
              </div>
            ))}
          </div>
          <div className="mt-6 rounded-lg bg-white p-6 shadow">
            <h2 className="text-sm font-medium text-gray-900">Recent activity</h2>
            <p className="mt-2 text-sm text-gray-500">
              Connect a data source to populate this panel.
            </p>
          </div>
        </main>
      </div>
    </div>
  )
}

export default App
"##;

const LANDING: &str = r##"const features = [
  {
    title: 'Fast by default',
    description: 'Instant dev server start and lightning-quick hot reload.',
  },
  {
    title: 'Utility-first styling',
    description: 'Compose any design directly in your markup with Tailwind.',
  },
  {
    title: 'Production ready',
    description: 'Optimized builds out of the box, no configuration needed.',
  },
]

function App() {
  return (
    <div className="min-h-screen bg-white">
      <header className="mx-auto flex max-w-6xl items-center justify-between px-6 py-5">
        <span className="text-lg font-bold text-gray-900">Acme</span>
        <nav className="flex items-center gap-6 text-sm font-medium text-gray-600">
          <a href="#features" className="hover:text-gray-900">
            Features
          </a>
          <a href="#" className="hover:text-gray-900">
            Pricing
          </a>
          <a
            href="#"
            className="rounded-md bg-gray-900 px-4 py-2 text-white hover:bg-gray-700"
          >
            Sign up
          </a>
        </nav>
      </header>
      <main>
        <section className="mx-auto max-w-3xl px-6 py-24 text-center">
          <h1 className="text-5xl font-bold tracking-tight text-gray-900">
            Ship your next idea faster
          </h1>
          <p className="mt-6 text-lg text-gray-600">
            A modern front-end stack with everything wired up, so you can
            focus on the product instead of the plumbing.
          </p>
          <div className="mt-8 flex justify-center gap-4">
            <a
              href="#"
              className="rounded-md bg-indigo-600 px-6 py-3 text-sm font-semibold text-white hover:bg-indigo-500"
            >
              Get started
            </a>
            <a
              href="#features"
              className="rounded-md border border-gray-300 px-6 py-3 text-sm font-semibold text-gray-700 hover:bg-gray-50"
            >
              Learn more
            </a>
          </div>
        </section>
        <section id="features" className="bg-gray-50 py-20">
          <div className="mx-auto grid max-w-6xl grid-cols-1 gap-8 px-6 md:grid-cols-3">
            {features.map((feature) => (
              <div key={feature.title} className="rounded-lg bg-white p-6 shadow-sm">
                <h2 className="text-base font-semibold text-gray-900">
                  {feature.title}
                </h2>
                <p className="mt-2 text-sm text-gray-600">{feature.description}</p>
              </div>
            ))}
          </div>
        </section>
      </main>
      <footer className="mx-auto max-w-6xl px-6 py-10 text-center text-sm text-gray-500">
        &copy; {new Date().getFullYear()} Acme. All rights reserved.
      </footer>
    </div>
  )
}

export default App
"##;

const BLOG: &str = r##"const posts = [
  {
    slug: 'hello-world',
    title: 'Hello, world',
    date: 'Jan 4, 2025',
    excerpt:
      'The obligatory first post: why this blog exists and what to expect here.',
  },
  {
    slug: 'styling-with-tailwind',
    title: 'Styling with Tailwind',
    date: 'Jan 18, 2025',
    excerpt:
      'Utility classes look noisy until they do not. Notes from the first month.',
  },
  {
    slug: 'vite-in-production',
    title: 'Vite in production',
    date: 'Feb 2, 2025',
    excerpt:
      'Build output, preview servers, and the deployment checklist we settled on.',
  },
]

function App() {
  return (
    <div className="min-h-screen bg-white">
      <header className="border-b border-gray-200">
        <div className="mx-auto max-w-2xl px-6 py-10">
          <h1 className="text-3xl font-bold tracking-tight text-gray-900">
            The Weblog
          </h1>
          <p className="mt-2 text-gray-600">
            Occasional writing about building for the web.
          </p>
        </div>
      </header>
      <main className="mx-auto max-w-2xl px-6 py-12">
        <ul className="flex flex-col gap-10">
          {posts.map((post) => (
            <li key={post.slug}>
              <article>
                <time className="text-sm text-gray-500">{post.date}</time>
                <h2 className="mt-1 text-xl font-semibold text-gray-900">
                  <a href={'/posts/' + post.slug} className="hover:underline">
                    {post.title}
                  </a>
                </h2>
                <p className="mt-2 text-gray-600">{post.excerpt}</p>
              </article>
            </li>
          ))}
        </ul>
      </main>
    </div>
  )
}

export default App
"##;
