mod escape;
mod headings;
mod inline;
mod kitchensink;
mod links;
